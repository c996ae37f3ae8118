//! Fixed-depth search strategies (minimax, alpha-beta, stochastic sampling).
//!
//! Every strategy is a pure synchronous function of its inputs: a recursive
//! depth-first traversal that returns a [`SearchResult`] by value. Sibling
//! branches never observe each other's partial results; all aggregation is
//! done explicitly by the parent frame.

pub mod alpha_beta;
pub mod baseline;
pub mod minimax;
pub mod stochastic;

use std::hash::Hash;

use serde::Serialize;

use crate::tree::MoveTree;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Outcome of one search call.
pub struct SearchResult<M, K: Eq + Hash> {
    /// Value of the final position on the chosen line.
    pub value: f64,
    /// Chosen move sequence, at most `depth` long. The stochastic strategy
    /// reports only its single top-level choice; terminals report nothing.
    pub move_list: Vec<M>,
    /// Every position examined during the call, nested by ply.
    pub move_tree: MoveTree<K>,
}

impl<M, K: Eq + Hash> SearchResult<M, K> {
    /// Depth-0 / terminal result: static evaluation, no move, empty tree.
    #[inline]
    pub(crate) fn leaf(value: f64) -> Self {
        Self {
            value,
            move_list: Vec::new(),
            move_tree: MoveTree::new(),
        }
    }
}
