//! Memo table for exact subtree values

use rustc_hash::FxHashMap;

/// Worst-case depths keyed by candidate-set signature
///
/// The signature is the ascending list of dictionary indices, which is
/// canonical because candidate sets are always built in dictionary order.
/// Only exact values are stored; a search cut off by its bound proves nothing
/// reusable.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<Box<[u32]>, u32>,
    hits: u64,
}

impl MemoTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, candidates: &[u32]) -> Option<u32> {
        let value = self.entries.get(candidates).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    pub fn insert(&mut self, candidates: &[u32], depth: u32) {
        self.entries.insert(candidates.into(), depth);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }
}
