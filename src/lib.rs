//! # blockmark
//!
//! A parser for comment-delimited block markup: named, attributed,
//! nestable regions embedded in otherwise free-form text.
//!
//! ```text
//! intro prose
//! <!-- wp:quote {"cite":"someone"} -->
//!   a nested region
//!   <!-- wp:separator /-->
//! <!-- /wp:quote -->
//! trailing prose
//! ```
//!
//! [`parse`] turns a document like the one above into an ordered tree of
//! [`ast::BlockNode`]s. The parse is total: malformed markup - unbalanced
//! delimiters, invalid attribute JSON, stray closers - degrades to
//! free-form text nodes instead of failing, so every document yields at
//! least one node.

pub mod ast;
pub mod parser;

pub use ast::{AttributeMap, BlockNode, InnerContent};
pub use parser::parse;
