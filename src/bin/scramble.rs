use clap::Parser;
use npuzzle_solver::engine::{Shape, State};

/// Emits a random start state that is solvable against the canonical goal,
/// in the exact format the `solve` binary consumes.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of grid rows
    #[clap(long, default_value_t = 3)]
    rows: usize,

    /// Number of grid columns
    #[clap(long, default_value_t = 3)]
    cols: usize,

    /// Seed for the scramble; the same seed always yields the same state
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Also print the state as a grid on stderr
    #[clap(long)]
    grid: bool,
}

fn main() {
    let args = Args::parse();
    let shape = Shape::new(args.rows, args.cols);
    let goal = State::solved(shape);
    let scrambled = State::scrambled(shape, &goal, args.seed);

    let line = scrambled
        .tiles()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);

    if args.grid {
        eprintln!("{}", scrambled.to_grid_string(shape));
    }
}
