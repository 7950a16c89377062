//! Recursive block assembler.

use crate::ast::{BlockNode, InnerContent};

use super::combinators::{choice, not, sequence, zero_or_more, Parser};
use super::context::ParseContext;
use super::matchers::any;
use super::Fragment;

/// Parse one block anchored at `at`. Called through the memoized
/// [`ParseContext::block`] wrapper.
///
/// Fails when no opener matches, when the declared attributes are not a
/// valid JSON object, or when the interior is not followed by a closer.
/// On failure the enclosing scan re-absorbs the span one raw character at
/// a time; missing-closer recovery is exactly this failure propagation,
/// not a special case.
pub(crate) fn scan_block<'src>(
    ctx: &mut ParseContext<'src>,
    at: usize,
) -> Option<(usize, BlockNode)> {
    let opener = ctx.opener(at)?;
    if opener.is_void {
        return Some((opener.end, BlockNode::void(opener.name, opener.attributes)));
    }

    // Greedily consume the balanced interior: a nested block, or one raw
    // character so long as neither a block nor a closer starts here.
    let nested: Parser<'src, Vec<Fragment>> = Box::new(block_fragments);
    let guarded_char: Parser<'src, Vec<Fragment>> = sequence(vec![
        not(Box::new(block_fragments) as Parser<'src, Vec<Fragment>>),
        not(Box::new(closer_fragments) as Parser<'src, Vec<Fragment>>),
        Box::new(any),
    ]);
    let mut interior = zero_or_more(choice(vec![nested, guarded_char]));
    let (after_interior, groups) = interior(ctx, opener.end)?;

    let mut raw_inner = String::new();
    let mut children = Vec::new();
    let mut content: Vec<InnerContent> = Vec::new();
    for group in groups {
        for fragment in group {
            match fragment {
                Fragment::Text(text) => push_text(&mut raw_inner, &mut content, &text),
                Fragment::Node(node) if node.is_text() => {
                    push_text(&mut raw_inner, &mut content, &node.raw_inner);
                }
                Fragment::Node(node) => {
                    children.push(node);
                    content.push(InnerContent::ChildMarker);
                }
            }
        }
    }

    let end = ctx.closer(after_interior)?;
    Some((
        end,
        BlockNode::named(opener.name, opener.attributes, children, raw_inner, content),
    ))
}

/// The block rule in combinator form: one parsed block as a fragment.
pub(crate) fn block_fragments(
    ctx: &mut ParseContext<'_>,
    at: usize,
) -> Option<(usize, Vec<Fragment>)> {
    let (end, node) = ctx.block(at)?;
    Some((end, vec![Fragment::Node(node)]))
}

/// The closer rule in combinator form. Only ever used under `not`, so the
/// value is never folded into a node.
fn closer_fragments(ctx: &mut ParseContext<'_>, at: usize) -> Option<(usize, Vec<Fragment>)> {
    let end = ctx.closer(at)?;
    let text = ctx.source()[at..end].to_string();
    Some((end, vec![Fragment::Text(text)]))
}

/// Append raw text to the running accumulation, merging into the last
/// content fragment when it is already text.
fn push_text(raw_inner: &mut String, content: &mut Vec<InnerContent>, text: &str) {
    raw_inner.push_str(text);
    match content.last_mut() {
        Some(InnerContent::Text(last)) => last.push_str(text),
        _ => content.push(InnerContent::Text(text.to_string())),
    }
}
