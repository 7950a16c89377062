//! Block delimiter grammar: opener, void opener, and closer recognizers.
//!
//! Delimiters are HTML-comment shaped:
//!
//! ```text
//! <!-- wp:namespace/name {"json":"attrs"} -->   opener
//! <!-- wp:namespace/name {"json":"attrs"} /-->  void opener
//! <!-- /wp:namespace/name -->                   closer
//! ```
//!
//! Identifiers match `[a-z][a-z0-9_-]*`; the namespace (and its slash) is
//! optional and defaults to `core`. Whitespace between the tokens inside a
//! delimiter is mandatory. The attribute region starts at `{` and ends at
//! the first `}` that is followed by whitespace and the opener tail; its
//! text must then decode as a JSON object, otherwise the opener as a whole
//! fails and the caller degrades the span to raw text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::AttributeMap;

use super::matchers::pattern_match;

/// Comment open, `wp:` sigil, optional namespace, name, then mandatory
/// whitespace before attributes or the tail.
static OPENER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\s+wp:(?:([a-z][a-z0-9_-]*)/)?([a-z][a-z0-9_-]*)\s+").unwrap());

/// End of an attribute region inside a void opener: the closing brace,
/// mandatory whitespace, then the self-closing tail.
static VOID_ATTR_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s+/-->").unwrap());

/// End of an attribute region inside a non-void opener.
static ATTR_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s+-->").unwrap());

static CLOSER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\s+/wp:(?:[a-z][a-z0-9_-]*/)?[a-z][a-z0-9_-]*\s+-->").unwrap());

/// A recognized block opener.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Opener {
    /// Index just past the opener.
    pub(crate) end: usize,
    /// Qualified name, namespace defaulted to `core/` when absent.
    pub(crate) name: String,
    /// Decoded attribute object; empty when none declared.
    pub(crate) attributes: AttributeMap,
    /// Whether the opener is self-closing.
    pub(crate) is_void: bool,
}

/// Recognize an opener anchored at `at`: the void form is tried first,
/// then the non-void form.
pub(crate) fn scan_opener(source: &str, at: usize) -> Option<Opener> {
    scan_void_opener(source, at).or_else(|| scan_nonvoid_opener(source, at))
}

/// Recognize a closer anchored at `at`; yields the index just past it.
/// Closer names are not compared against the opener that is being closed.
pub(crate) fn scan_closer(source: &str, at: usize) -> Option<usize> {
    let (end, _) = pattern_match(source, at, &CLOSER)?;
    Some(end)
}

fn scan_void_opener(source: &str, at: usize) -> Option<Opener> {
    let (pos, name) = opener_prefix(source, at)?;
    scan_opener_tail(source, pos, name, &VOID_ATTR_TAIL, "/-->", true)
}

fn scan_nonvoid_opener(source: &str, at: usize) -> Option<Opener> {
    let (pos, name) = opener_prefix(source, at)?;
    scan_opener_tail(source, pos, name, &ATTR_TAIL, "-->", false)
}

/// Match the common opener prefix anchored at `at`; yields the index just
/// past the mandatory whitespace and the qualified name.
fn opener_prefix(source: &str, at: usize) -> Option<(usize, String)> {
    let caps = OPENER_PREFIX.captures_at(source, at)?;
    let whole = caps.get(0)?;
    if whole.start() != at {
        return None;
    }
    let namespace = caps.get(1).map_or("core", |m| m.as_str());
    let name = format!("{}/{}", namespace, caps.get(2)?.as_str());
    Some((whole.end(), name))
}

/// Finish an opener from just past its prefix: an optional `{...}`
/// attribute region, then the tail (`-->` or `/-->`).
fn scan_opener_tail(
    source: &str,
    pos: usize,
    name: String,
    attr_tail: &Regex,
    tail: &str,
    is_void: bool,
) -> Option<Opener> {
    let rest = source.get(pos..)?;
    if rest.starts_with('{') {
        let terminator = attr_tail.find_at(source, pos)?;
        // Include the closing brace in the attribute text.
        let attributes = parse_attributes(&source[pos..terminator.start() + 1])?;
        Some(Opener {
            end: terminator.end(),
            name,
            attributes,
            is_void,
        })
    } else if rest.starts_with(tail) {
        Some(Opener {
            end: pos + tail.len(),
            name,
            attributes: AttributeMap::new(),
            is_void,
        })
    } else {
        None
    }
}

/// Decode the attribute region as a JSON object. A malformed region is a
/// recoverable failure, not an error: the opener fails and the candidate
/// block collapses to ordinary text.
fn parse_attributes(text: &str) -> Option<AttributeMap> {
    serde_json::from_str(text).ok()
}
