//! The move tree: a recursive record of every position a search examined.
//!
//! Each level maps a move key to the subtree explored after that move; leaves
//! are empty maps. No cycles are possible because the structure mirrors the
//! strictly decreasing depth of the recursion, so plain owned nesting is
//! enough (no graph machinery, no sharing).

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Recursive map from move keys to the subtrees explored under them.
///
/// A tree returned by a depth-`d` search nests at most `d` levels. Pruning
/// removes sibling *entries* at a node, never the record of a move once
/// visited: a pruned node's surviving entries still carry full-depth
/// subtrees.
pub struct MoveTree<K: Eq + Hash> {
    children: FxHashMap<K, MoveTree<K>>,
}

impl<K: Eq + Hash> MoveTree<K> {
    #[inline]
    pub fn new() -> Self {
        Self {
            children: FxHashMap::default(),
        }
    }

    /// Record `subtree` as the exploration under `key`, replacing any
    /// previous entry. Minimax-style searches visit each move exactly once,
    /// so replacement never discards anything there.
    #[inline]
    pub fn insert(&mut self, key: K, subtree: MoveTree<K>) {
        self.children.insert(key, subtree);
    }

    /// Fold `subtree` into the entry for `key`, creating the entry if absent.
    /// An existing entry is merged key-by-key, never overwritten; sampling
    /// searches use this so repeated visits to a move accumulate the union of
    /// all sampled continuations.
    pub fn merge_child(&mut self, key: K, subtree: MoveTree<K>) {
        use std::collections::hash_map::Entry;

        match self.children.entry(key) {
            Entry::Occupied(mut e) => e.get_mut().merge(subtree),
            Entry::Vacant(e) => {
                e.insert(subtree);
            }
        }
    }

    /// Recursive union with `other`.
    pub fn merge(&mut self, other: MoveTree<K>) {
        for (key, subtree) in other.children {
            self.merge_child(key, subtree);
        }
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&MoveTree<K>> {
        self.children.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.children.contains_key(key)
    }

    /// Number of direct children at this level.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &MoveTree<K>)> {
        self.children.iter()
    }

    /// Total number of recorded positions (entries at every level).
    pub fn node_count(&self) -> usize {
        self.children
            .values()
            .map(|subtree| 1 + subtree.node_count())
            .sum()
    }

    /// Maximum nesting depth; an empty tree has depth 0.
    pub fn depth(&self) -> u32 {
        self.children
            .values()
            .map(|subtree| 1 + subtree.depth())
            .max()
            .unwrap_or(0)
    }
}

impl<K: Eq + Hash> Default for MoveTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
