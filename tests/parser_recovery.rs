//! Malformed-input recovery.
//!
//! Nothing here may fail the parse: unbalanced blocks, bad attribute
//! JSON, stray closers and delimiter near-misses all degrade to free-form
//! text, and the parse always yields at least one node.

use blockmark::{parse, InnerContent};

#[test]
fn test_missing_closer_degrades_opener_to_text() {
    let nodes = parse("<!-- wp:first --><!-- wp:last --><!-- /wp:last -->");
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, "<!-- wp:first -->");
    assert_eq!(nodes[1].name.as_deref(), Some("core/last"));
    assert_eq!(nodes[1].raw_inner, "");
}

#[test]
fn test_lone_opener_is_text() {
    let nodes = parse("<!-- wp:block -->");
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, "<!-- wp:block -->");
}

#[test]
fn test_stray_closer_is_text() {
    let nodes = parse("<!-- /wp:block -->");
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, "<!-- /wp:block -->");
}

#[test]
fn test_invalid_attribute_json_degrades_to_text() {
    let doc = "<!-- wp:block {a: 5} -->inner<!-- /wp:block -->";
    let nodes = parse(doc);
    // The opener fails, so the closer has nothing to close and the whole
    // span is a single merged text node.
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, doc);
}

#[test]
fn test_mixed_text_sources_merge_into_one_node() {
    // Raw prose followed by a degraded opener: both become text and the
    // runs merge into a single node.
    let doc = "abc<!-- wp:bad -->def";
    let nodes = parse(doc);
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, doc);
}

#[test]
fn test_recovered_text_around_a_real_block() {
    let nodes = parse("<!-- wp:none -->x<!-- wp:v /-->");
    // The unclosed opener and the raw character degrade to one text node;
    // the void block still parses.
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, "<!-- wp:none -->x");
    assert_eq!(nodes[1].name.as_deref(), Some("core/v"));
}

#[test]
fn test_inner_block_may_consume_an_outer_closer() {
    // Closer names are not matched against openers, so the inner block
    // closes on the outer closer and the outer opener degrades to text.
    let nodes = parse("<!-- wp:outer --><!-- wp:inner -->x<!-- /wp:outer -->");
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, "<!-- wp:outer -->");
    assert_eq!(nodes[1].name.as_deref(), Some("core/inner"));
    assert_eq!(nodes[1].raw_inner, "x");
}

#[test]
fn test_delimiter_near_misses_are_text() {
    for doc in [
        "<!--wp:a -->x<!-- /wp:a -->",  // missing space after <!--
        "<!-- wp:a-->x<!-- /wp:a -->",  // missing space before -->
        "<!-- wp:2bad -->x<!-- /wp:2bad -->", // identifier starts with digit
        "<!- wp:a -->x<!-- /wp:a -->",  // truncated comment open
    ] {
        let nodes = parse(doc);
        assert_eq!(nodes.len(), 1, "expected pure text for {:?}", doc);
        assert!(nodes[0].is_text());
        assert_eq!(nodes[0].raw_inner, doc);
    }
}

#[test]
fn test_unclosed_nested_block_degrades_inside_parent() {
    let nodes = parse("<!-- wp:a -->before<!-- wp:b -->after<!-- /wp:a -->");
    // The inner opener never finds its own closer candidate before the
    // parent's closer; wp:b steals `<!-- /wp:a -->`... unless nothing is
    // left for the parent, in which case the parent degrades instead.
    assert_eq!(nodes.len(), 2);
    assert!(nodes[0].is_text());
    assert_eq!(nodes[0].raw_inner, "<!-- wp:a -->before");
    assert_eq!(nodes[1].name.as_deref(), Some("core/b"));
    assert_eq!(nodes[1].raw_inner, "after");
}

#[test]
fn test_trailing_prose_after_balanced_block() {
    let nodes = parse("<!-- wp:a -->x<!-- /wp:a -->tail");
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].name.as_deref(), Some("core/a"));
    assert!(nodes[1].is_text());
    assert_eq!(nodes[1].raw_inner, "tail");
}

#[test]
fn test_content_placeholders_match_children_after_recovery() {
    let nodes = parse("<!-- wp:a -->x<!-- wp:bad {oops} -->y<!-- wp:v /--><!-- /wp:a -->");
    assert_eq!(nodes.len(), 1);
    let a = &nodes[0];
    // The bad opener degrades to raw text inside the parent.
    assert_eq!(a.raw_inner, "x<!-- wp:bad {oops} -->y");
    assert_eq!(a.children.len(), 1);
    let markers = a
        .content
        .iter()
        .filter(|c| matches!(c, InnerContent::ChildMarker))
        .count();
    assert_eq!(markers, 1);
    assert_eq!(a.content_text(), a.raw_inner);
}
