//! Built-in toy games (compile-time configs).
//!
//! Small enough to reason about by hand, independent of any real board game.
//! Tests, benches and demo binaries run the search strategies against these.

use crate::game::{GameRules, Side};

#[derive(Debug, Clone, Copy)]
/// One-dimensional counting game with forced directions.
///
/// State is an integer counter `n`. [`Side::Max`] may only step `n -> n + 1`,
/// [`Side::Min`] only `n -> n - 1`, and all movement stops once
/// `|n| >= bound` (no legal moves, terminal). Evaluation is the counter
/// itself, so higher favors `Max` as required. Moves and move keys are both
/// the step delta.
pub struct CountingGame {
    bound: i64,
}

impl CountingGame {
    #[inline]
    pub fn new(bound: i64) -> Self {
        Self { bound }
    }
}

impl GameRules for CountingGame {
    type State = i64;
    type Flags = ();
    type Move = i64;
    type MoveKey = i64;

    fn enumerate_moves(&self, side: Side, state: &i64, _flags: &()) -> Vec<i64> {
        if state.abs() >= self.bound {
            return Vec::new();
        }
        match side {
            Side::Max => vec![1],
            Side::Min => vec![-1],
        }
    }

    fn apply_move(&self, side: Side, state: &i64, _flags: &(), mv: &i64) -> (Side, i64, ()) {
        (side.opponent(), state + mv, ())
    }

    fn evaluate(&self, state: &i64) -> f64 {
        *state as f64
    }

    fn move_key(&self, mv: &i64) -> i64 {
        *mv
    }
}

#[derive(Debug, Clone, Copy)]
/// Two-choice variant of [`CountingGame`]: either side may step `+1` or `-1`,
/// enumerated in that order, stopping at the bound.
///
/// Branching factor 2 makes it the game of choice for pruning, tie-break and
/// tree-union checks.
pub struct DriftGame {
    bound: i64,
}

impl DriftGame {
    #[inline]
    pub fn new(bound: i64) -> Self {
        Self { bound }
    }
}

impl GameRules for DriftGame {
    type State = i64;
    type Flags = ();
    type Move = i64;
    type MoveKey = i64;

    fn enumerate_moves(&self, _side: Side, state: &i64, _flags: &()) -> Vec<i64> {
        if state.abs() >= self.bound {
            return Vec::new();
        }
        vec![1, -1]
    }

    fn apply_move(&self, side: Side, state: &i64, _flags: &(), mv: &i64) -> (Side, i64, ()) {
        (side.opponent(), state + mv, ())
    }

    fn evaluate(&self, state: &i64) -> f64 {
        *state as f64
    }

    fn move_key(&self, mv: &i64) -> i64 {
        *mv
    }
}
