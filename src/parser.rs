//! Grammar engine for comment-delimited block markup.
//!
//! The engine is a small backtracking parser-combinator stack:
//!
//! 1. [`combinators`] - generic primitives (`zero_or_more`, `one_or_more`,
//!    `choice`, `sequence`, `not`) over a uniform parser signature.
//! 2. [`matchers`] - primitive matchers (`any`, `whitespace`, anchored
//!    pattern matching, `freeform`).
//! 3. `grammar` - the block delimiter grammar: opener, void opener, closer.
//! 4. `block` / `document` - the recursive assemblers that fold scanned
//!    fragments into the block tree.
//!
//! Every rule signals failure by returning `None`; no rule panics and no
//! failure is fatal at the top level. [`parse`] is total: any input,
//! however malformed, yields at least one node.
//!
//! The mutually recursive rules (document <-> block <-> opener/closer) run
//! through a [`ParseContext`] that memoizes results per start index, so a
//! rule's cost over a full parse stays linear in the document length even
//! under heavy backtracking.

pub mod combinators;
pub mod context;
pub mod matchers;

mod block;
mod document;
mod grammar;

use crate::ast::BlockNode;

pub use context::ParseContext;
pub use document::parse;

/// One token produced while scanning: a raw text fragment or a parsed
/// block. The assemblers fold streams of these into the node tree,
/// merging adjacent text as they go.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// A run of raw text (a single character when produced by `any`).
    Text(String),
    /// A fully parsed block.
    Node(BlockNode),
}
