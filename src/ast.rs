//! Block node model for parsed documents.
//!
//! A document parses into an ordered sequence of [`BlockNode`]s. A node is
//! either a named block (optionally attributed, optionally nested) or a
//! free-form text run (`name` is `None`). Nodes are immutable once returned
//! by the parser and are built bottom-up in a single pass.

use serde::{Deserialize, Serialize};

/// Attribute map for a block: string keys to JSON-typed values.
///
/// Key order is not significant. Values cover the full JSON range
/// (string, number, boolean, null, array, object).
pub type AttributeMap = serde_json::Map<String, serde_json::Value>;

/// One element of a block's inner content: either a raw text fragment or a
/// placeholder marking where a child block belongs relative to the
/// interleaved text.
///
/// Serializes as the fragment string or as `null` for a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InnerContent {
    /// A run of raw text between child blocks.
    Text(String),
    /// A child block belongs here; the n-th marker corresponds to the
    /// n-th entry of [`BlockNode::children`].
    ChildMarker,
}

/// A parsed block: a named, attributed, nestable region of the document,
/// or a free-form text run when `name` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    /// Qualified block name (`namespace/name`), or `None` for a text node.
    pub name: Option<String>,
    /// Declared attributes; empty when the opener carried none.
    pub attributes: AttributeMap,
    /// Child blocks, in document order. Empty for void and text nodes.
    pub children: Vec<BlockNode>,
    /// The exact inner text between opener and closer, with child block
    /// source text excluded.
    pub raw_inner: String,
    /// Text fragments interleaved with one [`InnerContent::ChildMarker`]
    /// per child, in document order.
    pub content: Vec<InnerContent>,
}

impl BlockNode {
    /// A named block with interior content.
    pub fn named(
        name: String,
        attributes: AttributeMap,
        children: Vec<BlockNode>,
        raw_inner: String,
        content: Vec<InnerContent>,
    ) -> Self {
        BlockNode {
            name: Some(name),
            attributes,
            children,
            raw_inner,
            content,
        }
    }

    /// A void (self-closing) block: no children, no inner text.
    pub fn void(name: String, attributes: AttributeMap) -> Self {
        BlockNode {
            name: Some(name),
            attributes,
            children: Vec::new(),
            raw_inner: String::new(),
            content: Vec::new(),
        }
    }

    /// A free-form text node wrapping a raw span of the document.
    pub fn text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        BlockNode {
            name: None,
            attributes: AttributeMap::new(),
            children: Vec::new(),
            content: vec![InnerContent::Text(raw.clone())],
            raw_inner: raw,
        }
    }

    /// Whether this node is a free-form text run.
    pub fn is_text(&self) -> bool {
        self.name.is_none()
    }

    /// Concatenation of the text fragments of `content`, in order.
    /// Placeholders contribute nothing; for every parsed node this equals
    /// [`BlockNode::raw_inner`].
    pub fn content_text(&self) -> String {
        let mut out = String::new();
        for item in &self.content {
            if let InnerContent::Text(fragment) = item {
                out.push_str(fragment);
            }
        }
        out
    }

    /// Append more raw text to a text node. Used by the assemblers when
    /// merging adjacent text runs; callers guarantee `self.is_text()`.
    pub(crate) fn append_text(&mut self, more: &str) {
        self.raw_inner.push_str(more);
        match self.content.last_mut() {
            Some(InnerContent::Text(fragment)) => fragment.push_str(more),
            _ => self.content.push(InnerContent::Text(more.to_string())),
        }
    }
}
