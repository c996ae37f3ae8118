use rand::rngs::StdRng;
use rand::SeedableRng;

use adversarial_search::game::{SearchError, Side};
use adversarial_search::games::DriftGame;
use adversarial_search::search::alpha_beta::alpha_beta;
use adversarial_search::search::baseline::random_move;
use adversarial_search::search::minimax::minimax;
use adversarial_search::search::stochastic::stochastic;
use adversarial_search::selector::UniformRandom;

fn main() -> Result<(), SearchError> {
    let depth: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4);
    let breadth: usize = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(16);

    let game = DriftGame::new(6);
    let side = Side::Max;
    let start = 0i64;

    let exhaustive = minimax(&game, side, &start, &(), depth);
    println!(
        "minimax    value={:+.2} line={:?} nodes={}",
        exhaustive.value,
        exhaustive.move_list,
        exhaustive.move_tree.node_count()
    );

    let pruned = alpha_beta(&game, side, &start, &(), depth);
    println!(
        "alpha-beta value={:+.2} line={:?} nodes={}",
        pruned.value,
        pruned.move_list,
        pruned.move_tree.node_count()
    );

    let mut selector = UniformRandom::new(StdRng::seed_from_u64(7));
    let sampled = stochastic(&game, side, &start, &(), depth, breadth, &mut selector)?;
    println!(
        "stochastic value={:+.2} move={:?} nodes={}",
        sampled.value,
        sampled.move_list,
        sampled.move_tree.node_count()
    );

    let baseline = random_move(&game, side, &start, &(), &mut selector);
    println!(
        "baseline   value={:+.2} move={:?} nodes={}",
        baseline.value,
        baseline.move_list,
        baseline.move_tree.node_count()
    );

    Ok(())
}
