//! Primitive matchers underneath the delimiter grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use super::context::ParseContext;
use super::Fragment;
use crate::ast::BlockNode;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Match exactly one character, as a text fragment. Fails at end of input.
pub fn any(ctx: &mut ParseContext<'_>, at: usize) -> Option<(usize, Vec<Fragment>)> {
    let ch = ctx.source().get(at..)?.chars().next()?;
    Some((at + ch.len_utf8(), vec![Fragment::Text(ch.to_string())]))
}

/// Match a run of one or more whitespace characters.
pub fn whitespace(ctx: &mut ParseContext<'_>, at: usize) -> Option<(usize, Vec<Fragment>)> {
    let (end, matched) = pattern_match(ctx.source(), at, &WHITESPACE)?;
    Some((end, vec![Fragment::Text(matched.to_string())]))
}

/// Anchored regex match: succeeds only when `pattern` matches starting
/// exactly at `at`. The regex engine is asked to search from `at` and the
/// match start is then compared against it, so patterns need no explicit
/// anchor.
pub fn pattern_match<'t>(source: &'t str, at: usize, pattern: &Regex) -> Option<(usize, &'t str)> {
    let matched = pattern.find_at(source, at)?;
    if matched.start() != at {
        return None;
    }
    Some((matched.end(), matched.as_str()))
}

/// Wrap a raw span of the document as a free-form text node.
pub fn freeform(source: &str, start: usize, end: usize) -> BlockNode {
    BlockNode::text(&source[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_advances_one_char() {
        let mut ctx = ParseContext::new("ab");
        let (next, value) = any(&mut ctx, 0).unwrap();
        assert_eq!(next, 1);
        assert!(matches!(&value[0], Fragment::Text(t) if t == "a"));
    }

    #[test]
    fn test_any_fails_at_end_of_input() {
        let mut ctx = ParseContext::new("a");
        assert!(any(&mut ctx, 1).is_none());
        let mut empty = ParseContext::new("");
        assert!(any(&mut empty, 0).is_none());
    }

    #[test]
    fn test_any_is_utf8_aware() {
        let mut ctx = ParseContext::new("é!");
        let (next, value) = any(&mut ctx, 0).unwrap();
        assert_eq!(next, 'é'.len_utf8());
        assert!(matches!(&value[0], Fragment::Text(t) if t == "é"));
    }

    #[test]
    fn test_whitespace_matches_runs() {
        let mut ctx = ParseContext::new("  \t\nx");
        let (next, _) = whitespace(&mut ctx, 0).unwrap();
        assert_eq!(next, 4);
        assert!(whitespace(&mut ctx, 4).is_none());
    }

    #[test]
    fn test_pattern_match_is_anchored() {
        let digits = Regex::new(r"[0-9]+").unwrap();
        // Matches at the exact index only, even though a match exists later.
        assert_eq!(pattern_match("ab12", 0, &digits), None);
        assert_eq!(pattern_match("ab12", 2, &digits), Some((4, "12")));
    }

    #[test]
    fn test_freeform_wraps_span_as_text_node() {
        let node = freeform("hello world", 6, 11);
        assert!(node.is_text());
        assert_eq!(node.raw_inner, "world");
    }
}
