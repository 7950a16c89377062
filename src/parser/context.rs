//! Parse context: the borrowed source plus per-parse memo tables.
//!
//! The grammar is mutually recursive (document <-> block <-> opener and
//! closer), and the backtracking combinators revisit the same start index
//! many times - once per enclosing scan that falls back to raw-character
//! consumption. The context caches each rule's result per start index so
//! every result is computed once, which keeps a full parse linear in the
//! document length instead of exponential in nesting depth.
//!
//! A context is created per `parse` invocation and dropped with it, so the
//! caches can never go stale across documents.

use std::collections::HashMap;

use crate::ast::BlockNode;

use super::block;
use super::grammar::{self, Opener};

/// Shared state for one parse: the source under scan and the memo tables
/// for the recursive grammar rules, keyed by start index.
pub struct ParseContext<'src> {
    source: &'src str,
    block_memo: HashMap<usize, Option<(usize, BlockNode)>>,
    opener_memo: HashMap<usize, Option<Opener>>,
    closer_memo: HashMap<usize, Option<usize>>,
}

impl<'src> ParseContext<'src> {
    pub fn new(source: &'src str) -> Self {
        ParseContext {
            source,
            block_memo: HashMap::new(),
            opener_memo: HashMap::new(),
            closer_memo: HashMap::new(),
        }
    }

    /// The document under scan.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Memoized block rule: parse one block starting exactly at `at`.
    pub(crate) fn block(&mut self, at: usize) -> Option<(usize, BlockNode)> {
        if let Some(cached) = self.block_memo.get(&at) {
            return cached.clone();
        }
        let parsed = block::scan_block(self, at);
        self.block_memo.insert(at, parsed.clone());
        parsed
    }

    /// Memoized opener rule.
    pub(crate) fn opener(&mut self, at: usize) -> Option<Opener> {
        if let Some(cached) = self.opener_memo.get(&at) {
            return cached.clone();
        }
        let parsed = grammar::scan_opener(self.source, at);
        self.opener_memo.insert(at, parsed.clone());
        parsed
    }

    /// Memoized closer rule; yields the index just past the closer.
    pub(crate) fn closer(&mut self, at: usize) -> Option<usize> {
        if let Some(cached) = self.closer_memo.get(&at) {
            return *cached;
        }
        let parsed = grammar::scan_closer(self.source, at);
        self.closer_memo.insert(at, parsed);
        parsed
    }
}
