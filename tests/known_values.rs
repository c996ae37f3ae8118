//! Hand-computed golden results on the toy games.

use adversarial_search::game::Side;
use adversarial_search::games::{CountingGame, DriftGame};
use adversarial_search::search::alpha_beta::alpha_beta;
use adversarial_search::search::minimax::minimax;

#[test]
fn drift_depth2_from_origin() {
    // Max steps to 1, Min retreats to 0; the -1 root branch bottoms out at -2.
    let game = DriftGame::new(3);

    let exhaustive = minimax(&game, Side::Max, &0, &(), 2);
    assert_eq!(exhaustive.value, 0.0);
    assert_eq!(exhaustive.move_list, vec![1, -1]);
    // 2 root entries + 2 replies under each.
    assert_eq!(exhaustive.move_tree.node_count(), 6);

    // The second root branch's minimizer node cuts its sibling: its first
    // reply already reaches alpha = 0.
    let pruned = alpha_beta(&game, Side::Max, &0, &(), 2);
    assert_eq!(pruned.value, 0.0);
    assert_eq!(pruned.move_list, vec![1, -1]);
    assert_eq!(pruned.move_tree.node_count(), 5);
}

#[test]
fn drift_depth3_from_origin() {
    // +1 branch: Min answers -1, Max re-advances to 1.
    let game = DriftGame::new(3);

    let exhaustive = minimax(&game, Side::Max, &0, &(), 3);
    assert_eq!(exhaustive.value, 1.0);
    assert_eq!(exhaustive.move_list, vec![1, -1, 1]);
    // Full tree: 2 + 4 + 8 entries.
    assert_eq!(exhaustive.move_tree.node_count(), 14);
    assert_eq!(exhaustive.move_tree.depth(), 3);

    let pruned = alpha_beta(&game, Side::Max, &0, &(), 3);
    assert_eq!(pruned.value, 1.0);
    assert_eq!(pruned.move_list, vec![1, -1, 1]);
    // One minimizer node in the -1 root branch is cut after its first reply.
    assert_eq!(pruned.move_tree.node_count(), 11);
}

#[test]
fn counting_game_runs_into_the_wall() {
    // From 2 the maximizer's only move lands on the terminal 3; the
    // minimizer has no reply, so the line stops short of the depth.
    let game = CountingGame::new(3);

    let result = minimax(&game, Side::Max, &2, &(), 2);
    assert_eq!(result.value, 3.0);
    assert_eq!(result.move_list, vec![1]);
    assert_eq!(result.move_tree.node_count(), 1);
    assert_eq!(result.move_tree.depth(), 1);
}

#[test]
fn minimizer_mirror_of_the_end_to_end_case() {
    // Min steps to -1, Max recovers to 0.
    let game = CountingGame::new(3);

    let result = minimax(&game, Side::Min, &0, &(), 2);
    assert_eq!(result.value, 0.0);
    assert_eq!(result.move_list, vec![-1, 1]);
}
