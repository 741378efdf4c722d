//! # N-Puzzle Solver Library
//!
//! This library provides a generalized sliding-tile puzzle engine for any
//! rows-by-columns grid with a single blank cell, together with three
//! interchangeable search strategies: breadth-first search, iterative
//! deepening depth-first search, and A* with a selectable heuristic.
//!
//! It is used by three binaries:
//! - `solve`: Takes a grid shape, start and goal states, and a strategy,
//!   then prints the move sequence, step count and timing.
//! - `scramble`: Emits a deterministic, solvable random start state for a
//!   given shape and seed.
//! - `compare`: Runs every strategy over a batch of seeded scrambles and
//!   reports path lengths, expanded-node counts and timing.
//!
//! ## Modules
//! - `engine`: Grid shapes (`Shape`), slide actions (`Action`), validated
//!   tile permutations (`State`), the `Puzzle` facade, and the parity
//!   reachability predicate.
//! - `heuristics`: The `Heuristic` selector and the two admissible
//!   estimates (Manhattan distance, misplaced-tile count).
//! - `solver`: The three search strategies, the `Strategy`/`Solution`
//!   types, and path replay.
//! - `utils`: Text parsing of states, the input-validation boundary that
//!   guarantees only proper permutations reach the core.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
