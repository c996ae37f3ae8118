//! Collaborator contracts: sides, game rules and search errors.
//!
//! The search core owns no game knowledge. Everything game-specific (state
//! representation, legal-move enumeration, win/draw detection, static
//! evaluation, move-key encoding) arrives through [`GameRules`]; the engine
//! only consumes the contracts documented on the trait methods.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Side to move.
pub enum Side {
    /// The minimizing player.
    Min,
    /// The maximizing player.
    Max,
}

impl Side {
    /// Decode the source domain's boolean side tag.
    ///
    /// The convention reads backwards: `true` is the *minimizer's* turn,
    /// `false` the maximizer's. The mapping is load-bearing (evaluation sign,
    /// selection rules) and is pinned by tests rather than by naming.
    #[inline]
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Side::Min
        } else {
            Side::Max
        }
    }

    /// The boolean tag for this side (inverse of [`Side::from_flag`]).
    #[inline]
    pub fn flag(self) -> bool {
        self == Side::Min
    }

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Side::Min => Side::Max,
            Side::Max => Side::Min,
        }
    }

    /// Strict-improvement comparison for this side: `Max` prefers strictly
    /// greater values, `Min` strictly smaller ones. Ties never count as an
    /// improvement, so the first move reaching the extremum is kept.
    #[inline]
    pub fn prefers(self, new: f64, old: f64) -> bool {
        match self {
            Side::Min => new < old,
            Side::Max => new > old,
        }
    }

    /// Identity element for folds driven by [`Side::prefers`].
    #[inline]
    pub fn worst_value(self) -> f64 {
        match self {
            Side::Min => f64::INFINITY,
            Side::Max => f64::NEG_INFINITY,
        }
    }
}

/// The four operations the search core needs from a game.
///
/// All operations are synchronous and side-effect-free from the search's
/// point of view. The engine assumes, and does not check, that:
/// - [`GameRules::apply_move`] returns the opponent of the side it was given,
/// - [`GameRules::move_key`] never collides for distinct moves from the same
///   position.
///
/// Violating either contract leaves the search results undefined; the
/// collaborator's own test suite is the place to pin them down.
pub trait GameRules {
    /// Opaque game state. Passed by reference, never mutated by the search.
    type State;
    /// Opaque auxiliary state threaded alongside `State` (castling rights,
    /// en-passant files, ...). Same ownership rule.
    type Flags;
    /// One move, including any promotion-style annotation the game needs.
    type Move: Clone;
    /// Canonical encoding of a move, used only to index the move tree.
    type MoveKey: Eq + Hash;

    /// Every legal move for `side`, in tie-break priority order: when two
    /// moves later score equally, the one enumerated first is kept.
    fn enumerate_moves(&self, side: Side, state: &Self::State, flags: &Self::Flags)
        -> Vec<Self::Move>;

    /// Apply `mv` and return the resulting side, state and flags.
    fn apply_move(
        &self,
        side: Side,
        state: &Self::State,
        flags: &Self::Flags,
        mv: &Self::Move,
    ) -> (Side, Self::State, Self::Flags);

    /// Static evaluation of a terminal or cut-off state. Higher values favor
    /// [`Side::Max`]; the sign convention is fixed for the whole engine.
    fn evaluate(&self, state: &Self::State) -> f64;

    /// Canonical key for `mv`. Used solely for move-tree indexing, never for
    /// game logic.
    fn move_key(&self, mv: &Self::Move) -> Self::MoveKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Structured errors returned by search routines.
///
/// Searches are pure and total once their arguments are valid, so the only
/// failures are argument violations caught before any recursion begins.
pub enum SearchError {
    /// `breadth == 0` passed to the stochastic strategy.
    InvalidBreadth,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidBreadth => {
                write!(f, "invalid breadth: stochastic search needs at least one sample per move")
            }
        }
    }
}

impl std::error::Error for SearchError {}
