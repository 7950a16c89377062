//! Top-level document assembler and the public entry point.

use crate::ast::BlockNode;

use super::block::block_fragments;
use super::combinators::{choice, not, sequence, zero_or_more, Parser};
use super::context::ParseContext;
use super::matchers::{any, freeform};
use super::Fragment;

/// Parse a document into an ordered, never-empty sequence of block nodes.
///
/// Total over all inputs: whatever cannot be recognized as a block - plain
/// prose, delimiter near-misses, blocks with malformed attributes or a
/// missing closer - degrades to free-form text, and adjacent text runs
/// merge into a single node. The worst case is one text node spanning the
/// whole document.
pub fn parse(document: &str) -> Vec<BlockNode> {
    let mut ctx = ParseContext::new(document);
    block_list(&mut ctx)
}

/// Scan "a block, or one raw character when no block starts here" from
/// index 0, then fold the fragment stream into top-level nodes.
fn block_list<'src>(ctx: &mut ParseContext<'src>) -> Vec<BlockNode> {
    let source = ctx.source();

    let block_rule: Parser<'src, Vec<Fragment>> = Box::new(block_fragments);
    let raw_char: Parser<'src, Vec<Fragment>> = sequence(vec![
        not(Box::new(block_fragments) as Parser<'src, Vec<Fragment>>),
        Box::new(any),
    ]);
    let mut scan = zero_or_more(choice(vec![block_rule, raw_char]));

    let Some((consumed, groups)) = scan(ctx, 0) else {
        return vec![freeform(source, 0, source.len())];
    };

    // Degenerate case: nothing matched at all (e.g. the empty document).
    if groups.is_empty() {
        return vec![freeform(source, 0, source.len())];
    }

    let mut output: Vec<BlockNode> = Vec::new();
    for group in groups {
        for fragment in group {
            match fragment {
                Fragment::Text(text) => append_text(&mut output, &text),
                Fragment::Node(node) if node.is_text() => {
                    append_text(&mut output, &node.raw_inner);
                }
                Fragment::Node(node) => output.push(node),
            }
        }
    }

    // Unconsumed tail, if the scan stopped before the end of the document.
    if consumed < source.len() {
        append_text(&mut output, &source[consumed..]);
    }

    output
}

/// Push raw text as a top-level node, merging with a trailing text node so
/// adjacent text runs are never emitted as siblings.
fn append_text(output: &mut Vec<BlockNode>, text: &str) {
    match output.last_mut() {
        Some(last) if last.is_text() => last.append_text(text),
        _ => output.push(BlockNode::text(text)),
    }
}
