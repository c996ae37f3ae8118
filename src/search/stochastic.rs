//! Breadth-sampled stochastic search and its playout helper.

use crate::game::{GameRules, SearchError, Side};
use crate::search::SearchResult;
use crate::selector::Selector;
use crate::tree::MoveTree;

/// Breadth-sampled estimate of the best top-level move.
///
/// For each legal move the transition is applied once, then `breadth`
/// independent playouts run from the resulting position at `depth - 1`; the
/// leaf values are averaged and the move with the best average wins (strict
/// improvement only, first enumerated move kept on ties, mirroring minimax).
///
/// Every sample's subtree is folded into the move's entry by recursive union,
/// so the recorded tree is the union of all sampled continuations, not the
/// last sample. The move list carries only the single chosen top-level move:
/// each continuation is an independent random sample, not an optimal path.
///
/// Fails fast with [`SearchError::InvalidBreadth`] when `breadth == 0`. A
/// position with no legal moves is a leaf, as in minimax.
pub fn stochastic<G, S>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u32,
    breadth: usize,
    selector: &mut S,
) -> Result<SearchResult<G::Move, G::MoveKey>, SearchError>
where
    G: GameRules,
    S: Selector<G::Move>,
{
    if breadth == 0 {
        return Err(SearchError::InvalidBreadth);
    }

    let moves = game.enumerate_moves(side, state, flags);
    if moves.is_empty() {
        return Ok(SearchResult::leaf(game.evaluate(state)));
    }

    // The top level always consumes one ply itself.
    let sample_depth = depth.saturating_sub(1);

    let mut tree: MoveTree<G::MoveKey> = MoveTree::new();
    let mut best_value = side.worst_value();
    let mut best_move = moves[0].clone();

    for mv in &moves {
        let (next_side, next_state, next_flags) = game.apply_move(side, state, flags, mv);

        let mut sum = 0.0;
        let mut sampled: MoveTree<G::MoveKey> = MoveTree::new();
        for _ in 0..breadth {
            let (value, sample_tree) =
                sample_to_leaf(game, next_side, &next_state, &next_flags, sample_depth, selector);
            sum += value;
            sampled.merge(sample_tree);
        }
        tree.merge_child(game.move_key(mv), sampled);

        let average = sum / breadth as f64;
        if side.prefers(average, best_value) {
            best_value = average;
            best_move = mv.clone();
        }
    }

    Ok(SearchResult {
        value: best_value,
        move_list: vec![best_move],
        move_tree: tree,
    })
}

/// One playout to depth 0 (or to a dead end), following the selector's single
/// choice at every ply.
///
/// No minimization or maximization happens here; this is a playout simulator,
/// not a search. An empty candidate list is an immediate terminal returning
/// the static evaluation with an empty tree.
pub fn sample_to_leaf<G, S>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u32,
    selector: &mut S,
) -> (f64, MoveTree<G::MoveKey>)
where
    G: GameRules,
    S: Selector<G::Move>,
{
    if depth == 0 {
        return (game.evaluate(state), MoveTree::new());
    }

    let moves = game.enumerate_moves(side, state, flags);
    if moves.is_empty() {
        return (game.evaluate(state), MoveTree::new());
    }

    let mv = &moves[selector.choose(&moves)];
    let (next_side, next_state, next_flags) = game.apply_move(side, state, flags, mv);
    let (value, child) = sample_to_leaf(game, next_side, &next_state, &next_flags, depth - 1, selector);

    let mut tree = MoveTree::new();
    tree.insert(game.move_key(mv), child);
    (value, tree)
}
