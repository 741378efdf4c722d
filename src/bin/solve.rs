use clap::{Parser, ValueEnum};
use npuzzle_solver::engine::{Puzzle, Shape, State};
use npuzzle_solver::heuristics::Heuristic;
use npuzzle_solver::solver::{solve, Strategy};
use npuzzle_solver::utils::parse_state;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of grid rows
    #[clap(long, default_value_t = 3)]
    rows: usize,

    /// Number of grid columns
    #[clap(long, default_value_t = 3)]
    cols: usize,

    /// Search strategy
    #[clap(short, long, value_enum)]
    strategy: StrategyArg,

    /// Heuristic used by A* (ignored by the other strategies)
    #[clap(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,

    /// Depth budget for IDS; without it, IDS deepens until a solution is
    /// found and will not terminate on an unsolvable instance
    #[clap(long)]
    depth_limit: Option<u32>,

    /// Start state: row-major tile numbers with 0 for the blank,
    /// e.g. "1 2 3 4 5 0" for a 2x3 grid
    start: String,

    /// Goal state (defaults to the canonical solved state)
    goal: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Bfs,
    Ids,
    Astar,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HeuristicArg {
    Manhattan,
    Misplaced,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Misplaced => Heuristic::Misplaced,
        }
    }
}

fn main() {
    let args = Args::parse();
    let shape = Shape::new(args.rows, args.cols);

    let start = parse_state(&args.start, shape)
        .unwrap_or_else(|e| panic!("Invalid start state: {}", e));
    let goal = match &args.goal {
        Some(text) => {
            parse_state(text, shape).unwrap_or_else(|e| panic!("Invalid goal state: {}", e))
        }
        None => State::solved(shape),
    };
    let puzzle = Puzzle::new(shape, start, goal).expect("states were validated during parsing");

    let strategy = match args.strategy {
        StrategyArg::Bfs => Strategy::Bfs,
        StrategyArg::Ids => Strategy::Ids {
            depth_limit: args.depth_limit,
        },
        StrategyArg::Astar => Strategy::AStar(args.heuristic.into()),
    };

    println!("Shape: {}", shape);
    println!("Start state:\n{}", puzzle.start().to_grid_string(shape));
    println!("Goal state:\n{}", puzzle.goal().to_grid_string(shape));
    if !puzzle.is_solvable() {
        println!("Note: start and goal are in different parity classes; expect no solution.\n");
    }
    println!("Searching with {:?}...\n", strategy);

    let started = Instant::now();
    let result = solve(&puzzle, strategy);
    let elapsed = started.elapsed();

    match result {
        Some(solution) => {
            if solution.moves.is_empty() {
                println!("Sequence of moves: (already solved)");
            } else {
                println!("Sequence of moves: {}", solution.letters());
            }
            println!("No. of steps: {}", solution.moves.len());
            println!("Nodes expanded: {}", solution.expanded);
        }
        None => println!("No solution"),
    }
    println!("Time taken: {:.6}s", elapsed.as_secs_f64());
}
