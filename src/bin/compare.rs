use clap::Parser;
use npuzzle_solver::engine::{Puzzle, Shape, State};
use npuzzle_solver::heuristics::Heuristic;
use npuzzle_solver::solver::{solve, Strategy};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Runs every search strategy over a batch of seeded instances and reports
/// path lengths, expanded-node counts and timing per strategy.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of grid rows
    #[clap(long, default_value_t = 3)]
    rows: usize,

    /// Number of grid columns
    #[clap(long, default_value_t = 3)]
    cols: usize,

    /// Number of instances to evaluate
    #[clap(long, default_value_t = 10)]
    instances: usize,

    /// Seed of the first instance; instance i uses start_seed + i
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Length of the random walk that scrambles each instance. Bounds the
    /// optimal solution length, which keeps IDS tractable; fully random
    /// permutations would put average 3x3 instances out of its reach.
    #[clap(long, default_value_t = 12)]
    walk: u32,
}

// Scrambles by walking legal moves backwards from the goal, so the walk
// length is an upper bound on the instance's optimal solution length.
fn walk_from(shape: Shape, goal: &State, steps: u32, seed: u64) -> State {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut state = goal.clone();
    for _ in 0..steps {
        let mut neighbors = state.neighbors(shape);
        let pick = rng.gen_range(0..neighbors.len());
        state = neighbors.swap_remove(pick).0;
    }
    state
}

struct Tally {
    name: &'static str,
    strategy: Strategy,
    lengths: Vec<usize>,
    expanded: Vec<u64>,
    seconds: Vec<f64>,
}

impl Tally {
    fn new(name: &'static str, strategy: Strategy) -> Self {
        Tally {
            name,
            strategy,
            lengths: Vec::new(),
            expanded: Vec::new(),
            seconds: Vec::new(),
        }
    }
}

fn main() {
    let args = Args::parse();
    let shape = Shape::new(args.rows, args.cols);
    let goal = State::solved(shape);

    let mut tallies = vec![
        Tally::new("BFS", Strategy::Bfs),
        Tally::new(
            "IDS",
            Strategy::Ids {
                depth_limit: Some(args.walk),
            },
        ),
        Tally::new("A*-manhattan", Strategy::AStar(Heuristic::Manhattan)),
        Tally::new("A*-misplaced", Strategy::AStar(Heuristic::Misplaced)),
    ];

    println!(
        "Evaluating {} strategies on {} {} instances (walk length {})...",
        tallies.len(),
        args.instances,
        shape,
        args.walk
    );

    for i in 0..args.instances {
        let seed = args.start_seed + i as u64;
        let start = walk_from(shape, &goal, args.walk, seed);
        let puzzle = Puzzle::new(shape, start, goal.clone())
            .expect("walked states are valid permutations");

        println!("\nInstance {} (seed {}):", i, seed);
        for tally in &mut tallies {
            let started = Instant::now();
            let solution = solve(&puzzle, tally.strategy)
                .expect("walked instances are solvable within the walk length");
            let elapsed = started.elapsed().as_secs_f64();

            println!(
                "  {:<14} steps: {:<3} expanded: {:<8} time: {:.6}s",
                tally.name,
                solution.moves.len(),
                solution.expanded,
                elapsed
            );
            tally.lengths.push(solution.moves.len());
            tally.expanded.push(solution.expanded);
            tally.seconds.push(elapsed);
        }
    }

    println!("\n--- Averages over {} instances ---", args.instances);
    for tally in &tallies {
        if tally.lengths.is_empty() {
            continue;
        }
        let n = tally.lengths.len() as f64;
        let mean_len = tally.lengths.iter().sum::<usize>() as f64 / n;
        let mean_expanded = tally.expanded.iter().sum::<u64>() as f64 / n;
        let mean_time = tally.seconds.iter().sum::<f64>() / n;
        println!(
            "{:<14} steps: {:<6.2} expanded: {:<10.1} time: {:.6}s",
            tally.name, mean_len, mean_expanded, mean_time
        );
    }
}
