//! Uniform-random baseline.
//!
//! Exists to pin down the pluggable-selector contract and the minimal result
//! shape every strategy conforms to: one applied move, the evaluation of the
//! position after it, and a single-entry tree.

use crate::game::{GameRules, Side};
use crate::search::SearchResult;
use crate::selector::Selector;
use crate::tree::MoveTree;

/// Pick one legal move via `selector`, apply it, and report the resulting
/// evaluation. A position with no legal moves is a leaf, as everywhere else.
pub fn random_move<G, S>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    selector: &mut S,
) -> SearchResult<G::Move, G::MoveKey>
where
    G: GameRules,
    S: Selector<G::Move>,
{
    let moves = game.enumerate_moves(side, state, flags);
    if moves.is_empty() {
        return SearchResult::leaf(game.evaluate(state));
    }

    let mv = moves[selector.choose(&moves)].clone();
    let (_next_side, next_state, _next_flags) = game.apply_move(side, state, flags, &mv);

    let mut tree = MoveTree::new();
    tree.insert(game.move_key(&mv), MoveTree::new());

    SearchResult {
        value: game.evaluate(&next_state),
        move_list: vec![mv],
        move_tree: tree,
    }
}
