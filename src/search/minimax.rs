//! Exhaustive fixed-depth minimax.

use crate::game::{GameRules, Side};
use crate::search::SearchResult;
use crate::tree::MoveTree;

/// Minimax-optimal value, move sequence and full exploration record.
///
/// [`Side::Max`] keeps the strictly greatest child value, [`Side::Min`] the
/// strictly least; on ties the earliest enumerated move wins. The returned
/// tree holds one entry per enumerated move, whether or not that move became
/// the best. A position with no legal moves is a leaf regardless of remaining
/// depth: its static evaluation is returned with an empty move list and tree.
pub fn minimax<G: GameRules>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u32,
) -> SearchResult<G::Move, G::MoveKey> {
    if depth == 0 {
        return SearchResult::leaf(game.evaluate(state));
    }

    let moves = game.enumerate_moves(side, state, flags);
    if moves.is_empty() {
        return SearchResult::leaf(game.evaluate(state));
    }

    let mut tree: MoveTree<G::MoveKey> = MoveTree::new();
    let mut best_value = side.worst_value();
    let mut best_move = moves[0].clone();
    let mut best_line: Vec<G::Move> = Vec::new();

    for mv in &moves {
        let (next_side, next_state, next_flags) = game.apply_move(side, state, flags, mv);
        let child = minimax(game, next_side, &next_state, &next_flags, depth - 1);
        tree.insert(game.move_key(mv), child.move_tree);

        if side.prefers(child.value, best_value) {
            best_value = child.value;
            best_move = mv.clone();
            best_line = child.move_list;
        }
    }

    let mut move_list = Vec::with_capacity(best_line.len() + 1);
    move_list.push(best_move);
    move_list.extend(best_line);

    SearchResult {
        value: best_value,
        move_list,
        move_tree: tree,
    }
}
