//! Fixed-depth adversarial search over abstract two-player, perfect-information,
//! alternating-move games.
//!
//! Three interchangeable strategies — exhaustive minimax, alpha-beta pruned
//! minimax and breadth-sampled stochastic search — plus a uniform-random
//! baseline. Every strategy returns the position value, the chosen move
//! sequence and a [`tree::MoveTree`] recording exactly the positions it
//! examined. Game knowledge (state representation, legal moves, evaluation,
//! move-key encoding) is supplied through [`game::GameRules`].

pub mod game;
pub mod games;
pub mod search;
pub mod selector;
pub mod tree;
