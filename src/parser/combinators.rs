//! Parser combinator primitives.
//!
//! A parser is any boxed function `(ctx, at) -> Option<(next, value)>`:
//! `Some` carries the index just past the consumed span together with the
//! parsed value, `None` signals failure. Failure is ordinary control flow
//! here - callers route around it with [`choice`] and [`not`] - so no
//! combinator ever panics or returns an error type.
//!
//! `choice` and `sequence` take an ordered `Vec` of parsers rather than a
//! fixed arity; order is significant (first match wins, no further
//! disambiguation).

use super::context::ParseContext;

/// Uniform parser signature: consume from `at`, yield the next index and a
/// value, or fail with `None`.
pub type Parser<'src, T> =
    Box<dyn FnMut(&mut ParseContext<'src>, usize) -> Option<(usize, T)> + 'src>;

/// Apply `parser` repeatedly from the current index until it fails or the
/// input is exhausted. Never fails; the value keeps each sub-match as its
/// own element, preserving one level of nesting.
pub fn zero_or_more<'src, T: 'src>(mut parser: Parser<'src, T>) -> Parser<'src, Vec<T>> {
    Box::new(move |ctx, at| {
        let mut values = Vec::new();
        let mut cursor = at;
        while let Some((next, value)) = parser(ctx, cursor) {
            cursor = next;
            values.push(value);
        }
        Some((cursor, values))
    })
}

/// Like [`zero_or_more`], but fails when the first application fails.
pub fn one_or_more<'src, T: 'src>(mut parser: Parser<'src, T>) -> Parser<'src, Vec<T>> {
    Box::new(move |ctx, at| {
        let (mut cursor, first) = parser(ctx, at)?;
        let mut values = vec![first];
        while let Some((next, value)) = parser(ctx, cursor) {
            cursor = next;
            values.push(value);
        }
        Some((cursor, values))
    })
}

/// Try each alternative in order at the same index; the first success
/// wins. Fails only when every alternative fails.
pub fn choice<'src, T: 'src>(mut parsers: Vec<Parser<'src, T>>) -> Parser<'src, T> {
    Box::new(move |ctx, at| parsers.iter_mut().find_map(|parser| parser(ctx, at)))
}

/// Apply each parser in order from the advancing index. Atomic: if any
/// step fails the whole sequence fails and no partial progress is kept.
/// The value is the concatenation of the step values, so a zero-width
/// step (such as [`not`]) contributes nothing.
pub fn sequence<'src, T: 'src>(mut parsers: Vec<Parser<'src, Vec<T>>>) -> Parser<'src, Vec<T>> {
    Box::new(move |ctx, at| {
        let mut values = Vec::new();
        let mut cursor = at;
        for parser in parsers.iter_mut() {
            let (next, mut step) = parser(ctx, cursor)?;
            cursor = next;
            values.append(&mut step);
        }
        Some((cursor, values))
    })
}

/// Negative lookahead: succeeds with a zero-width, empty-valued match iff
/// `parser` fails at the current index. Never advances.
pub fn not<'src, T: 'src, U: 'src>(mut parser: Parser<'src, T>) -> Parser<'src, Vec<U>> {
    Box::new(move |ctx, at| match parser(ctx, at) {
        Some(_) => None,
        None => Some((at, Vec::new())),
    })
}
