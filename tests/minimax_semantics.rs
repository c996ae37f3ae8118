use adversarial_search::game::{GameRules, Side};
use adversarial_search::games::{CountingGame, DriftGame};
use adversarial_search::search::alpha_beta::alpha_beta;
use adversarial_search::search::minimax::minimax;

#[test]
fn side_flag_convention_reads_backwards() {
    // The source domain's boolean tag: true is the minimizer's turn.
    assert_eq!(Side::from_flag(true), Side::Min);
    assert_eq!(Side::from_flag(false), Side::Max);
    assert!(Side::Min.flag());
    assert!(!Side::Max.flag());
    assert_eq!(Side::Min.opponent(), Side::Max);
    assert_eq!(Side::Max.opponent(), Side::Min);
}

#[test]
fn depth_zero_is_the_static_evaluation() {
    let game = CountingGame::new(3);
    for n in -2..=2i64 {
        for side in [Side::Min, Side::Max] {
            for result in [
                minimax(&game, side, &n, &(), 0),
                alpha_beta(&game, side, &n, &(), 0),
            ] {
                assert_eq!(result.value, n as f64);
                assert!(result.move_list.is_empty());
                assert!(result.move_tree.is_empty());
            }
        }
    }
}

#[test]
fn move_list_spans_full_depth_when_moves_exist() {
    // From n = 0 the counting game oscillates between 0 and 1, so no ply ever
    // runs out of moves.
    let game = CountingGame::new(3);
    for depth in 0..=6u32 {
        let result = minimax(&game, Side::Max, &0, &(), depth);
        assert_eq!(result.move_list.len(), depth as usize);
        assert_eq!(result.move_tree.depth(), depth);
    }
}

#[test]
fn no_legal_moves_is_a_leaf_not_a_fault() {
    // |n| >= 3 leaves the maximizer with no moves; the position is treated as
    // terminal even with depth remaining.
    let game = CountingGame::new(3);
    let result = minimax(&game, Side::Max, &3, &(), 2);
    assert_eq!(result.value, 3.0);
    assert!(result.move_list.is_empty());
    assert!(result.move_tree.is_empty());

    let result = alpha_beta(&game, Side::Max, &3, &(), 2);
    assert_eq!(result.value, 3.0);
    assert!(result.move_list.is_empty());
    assert!(result.move_tree.is_empty());
}

#[test]
fn end_to_end_counting_game_depth_two() {
    // Maximizer steps to 1, minimizer retreats to 0.
    let game = CountingGame::new(3);
    let result = minimax(&game, Side::Max, &0, &(), 2);
    assert_eq!(result.value, 0.0);
    assert_eq!(result.move_list, vec![1, -1]);

    // The tree is the single examined line, nested by ply.
    assert_eq!(result.move_tree.node_count(), 2);
    let under_plus = result.move_tree.get(&1).unwrap();
    assert!(under_plus.contains_key(&-1));
    assert!(under_plus.get(&-1).unwrap().is_empty());
}

#[test]
fn tree_records_every_enumerated_move_not_just_the_best() {
    let game = DriftGame::new(3);
    let result = minimax(&game, Side::Max, &0, &(), 1);
    assert_eq!(result.value, 1.0);
    assert_eq!(result.move_list, vec![1]);
    // Both root moves appear even though only +1 was chosen.
    assert_eq!(result.move_tree.len(), 2);
    assert!(result.move_tree.contains_key(&1));
    assert!(result.move_tree.contains_key(&-1));
}

// Two distinct moves leading to the same successor state, so every child
// scores identically and the tie-break rule is observable.
#[derive(Debug, Clone, Copy)]
struct TwoDoorsOneRoom;

impl GameRules for TwoDoorsOneRoom {
    type State = i64;
    type Flags = ();
    type Move = u8;
    type MoveKey = u8;

    fn enumerate_moves(&self, _side: Side, state: &i64, _flags: &()) -> Vec<u8> {
        if *state == 0 {
            vec![7, 9]
        } else {
            Vec::new()
        }
    }

    fn apply_move(&self, side: Side, state: &i64, _flags: &(), _mv: &u8) -> (Side, i64, ()) {
        (side.opponent(), state + 1, ())
    }

    fn evaluate(&self, state: &i64) -> f64 {
        *state as f64
    }

    fn move_key(&self, mv: &u8) -> u8 {
        *mv
    }
}

#[test]
fn ties_keep_the_first_enumerated_move() {
    let game = TwoDoorsOneRoom;
    for result in [
        minimax(&game, Side::Max, &0, &(), 1),
        alpha_beta(&game, Side::Max, &0, &(), 1),
        minimax(&game, Side::Min, &0, &(), 1),
        alpha_beta(&game, Side::Min, &0, &(), 1),
    ] {
        assert_eq!(result.value, 1.0);
        assert_eq!(result.move_list, vec![7]);
        // The losing tie still appears in the exploration record.
        assert!(result.move_tree.contains_key(&9));
    }
}
