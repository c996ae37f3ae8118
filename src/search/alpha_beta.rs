//! Minimax with alpha-beta pruning.
//!
//! Pruning discards remaining sibling moves at a node once they provably
//! cannot affect the result. The root value and move list are identical to
//! [`crate::search::minimax::minimax`]'s for the same inputs; only the
//! recorded tree may be smaller, because moves cut before being visited
//! leave no entry.

use crate::game::{GameRules, Side};
use crate::search::SearchResult;
use crate::tree::MoveTree;

/// Alpha-beta search from the full `(-inf, +inf)` window.
///
/// Selection and tie-break rules match minimax exactly: strict improvement
/// only, first enumerated move kept on ties. An empty move list is a leaf,
/// as in minimax.
pub fn alpha_beta<G: GameRules>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u32,
) -> SearchResult<G::Move, G::MoveKey> {
    search(
        game,
        side,
        state,
        flags,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
    )
}

fn search<G: GameRules>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
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
        let child = search(game, next_side, &next_state, &next_flags, depth - 1, alpha, beta);
        tree.insert(game.move_key(mv), child.move_tree);

        if side.prefers(child.value, best_value) {
            best_value = child.value;
            best_move = mv.clone();
            best_line = child.move_list;
        }

        // Tighten the bound owned by this node, then cut remaining siblings
        // once the window closes.
        match side {
            Side::Max => alpha = alpha.max(best_value),
            Side::Min => beta = beta.min(best_value),
        }
        if beta <= alpha {
            break;
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
