//! Core engine for the generalized sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Shape`: The fixed rows-by-columns dimensions of a puzzle grid.
//! - `Action`: The four slide directions a tile can move into the blank.
//! - `State`: A validated permutation of tile values over the grid, with
//!   move application and neighbor generation.
//! - `Puzzle`: Binds a shape to a start and goal state and re-validates
//!   them whenever they are replaced.
//!
//! Reachability between two states is a parity invariant of this move
//! model; `is_reachable` exposes it so callers can screen instances before
//! handing them to a search strategy.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;

/// Errors produced when a tile sequence fails permutation validation.
///
/// Every `State` that reaches a search strategy has passed this check, so
/// the strategies themselves never have to re-derive the guarantee.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// The sequence does not have exactly `rows * cols` entries.
    #[error("expected {expected} tiles, found {found}")]
    WrongLength { expected: usize, found: usize },
    /// A value does not fall in `0..cells`.
    #[error("tile value {value} is out of range (must be below {cells})")]
    OutOfRange { value: u8, cells: usize },
    /// A value occurs more than once (so another is missing).
    #[error("tile value {0} appears more than once")]
    Duplicate(u8),
}

/// The dimensions of a puzzle grid.
///
/// A shape is immutable and copied freely. Cells are indexed row-major:
/// index `i` sits at row `i / cols`, column `i % cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Creates a shape with the given number of rows and columns.
    ///
    /// # Panics
    /// Panics if either dimension is zero, if the grid has fewer than two
    /// cells (no tile could ever move), or if it has more than 256 cells
    /// (tile values are stored as `u8`).
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "shape dimensions must be positive");
        assert!(rows * cols >= 2, "a puzzle needs at least two cells");
        assert!(rows * cols <= 256, "tile values are u8, at most 256 cells");
        Shape { rows, cols }
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Converts a flat cell index into `(row, col)` coordinates.
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A slide move: the tile adjacent to the blank in this direction slides
/// into the blank's cell (equivalently, the blank moves the opposite way).
///
/// Whether a given action is legal depends on the blank's row and column
/// relative to the grid bounds; `State::apply` performs that check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// The tile below the blank slides up.
    Up,
    /// The tile above the blank slides down.
    Down,
    /// The tile right of the blank slides left.
    Left,
    /// The tile left of the blank slides right.
    Right,
}

impl Action {
    /// All actions in the fixed generation order used by every strategy.
    ///
    /// The order is the same for every grid shape, so BFS and IDS expand
    /// neighbors deterministically regardless of puzzle size.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Single-letter form used in compact move listings.
    pub fn letter(&self) -> char {
        match self {
            Action::Up => 'U',
            Action::Down => 'D',
            Action::Left => 'L',
            Action::Right => 'R',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

// Shared by `State::new` and the `Puzzle` setters, which re-validate on
// every reassignment.
fn validate(tiles: &[u8], shape: Shape) -> Result<(), StateError> {
    let cells = shape.cells();
    if tiles.len() != cells {
        return Err(StateError::WrongLength {
            expected: cells,
            found: tiles.len(),
        });
    }
    let mut seen = vec![false; cells];
    for &value in tiles {
        if value as usize >= cells {
            return Err(StateError::OutOfRange { value, cells });
        }
        if seen[value as usize] {
            return Err(StateError::Duplicate(value));
        }
        seen[value as usize] = true;
    }
    Ok(())
}

/// A tile arrangement: a permutation of `0..cells` laid out row-major,
/// where `0` is the blank.
///
/// States are value-equal and hashable, which is what visited-set
/// membership in the strategies relies on. Successor states are always
/// fresh copies; applying a move never mutates the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    tiles: Vec<u8>,
}

impl State {
    /// Creates a state from a tile sequence, validating that it is a
    /// permutation of `0..shape.cells()`.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::{Shape, State, StateError};
    ///
    /// let shape = Shape::new(2, 3);
    /// assert!(State::new(vec![1, 2, 3, 4, 5, 0], shape).is_ok());
    /// assert_eq!(
    ///     State::new(vec![1, 2, 3, 4, 5], shape),
    ///     Err(StateError::WrongLength { expected: 6, found: 5 }),
    /// );
    /// ```
    pub fn new(tiles: Vec<u8>, shape: Shape) -> Result<Self, StateError> {
        validate(&tiles, shape)?;
        Ok(State { tiles })
    }

    /// The canonical solved arrangement: tiles `1..cells` in order with the
    /// blank in the bottom-right cell.
    pub fn solved(shape: Shape) -> Self {
        let cells = shape.cells();
        let tiles = (0..cells)
            .map(|i| if i + 1 == cells { 0 } else { (i + 1) as u8 })
            .collect();
        State { tiles }
    }

    /// Produces a deterministic random state reachable from `goal`.
    ///
    /// The same `(shape, goal, seed)` triple always yields the same state,
    /// which keeps generated test and benchmark instances reproducible.
    /// Shuffles are redrawn until the parity invariant against `goal`
    /// holds, so the result is always solvable.
    pub fn scrambled(shape: Shape, goal: &State, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles = goal.tiles.clone();
        loop {
            tiles.shuffle(&mut rng);
            let candidate = State {
                tiles: tiles.clone(),
            };
            if is_reachable(shape, &candidate, goal) {
                return candidate;
            }
        }
    }

    /// The tile values in row-major order.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Flat index of the blank cell, found by linear scan.
    pub fn blank_position(&self) -> usize {
        self.tiles
            .iter()
            .position(|&t| t == 0)
            .expect("state invariant: exactly one blank tile")
    }

    /// Applies a single action, returning the successor state.
    ///
    /// Returns `None` when the action would slide a tile from outside the
    /// grid, i.e. the blank already sits on the relevant boundary.
    pub fn apply(&self, shape: Shape, action: Action) -> Option<State> {
        let blank = self.blank_position();
        let (row, col) = shape.row_col(blank);
        let swap = match action {
            Action::Up if row + 1 < shape.rows() => blank + shape.cols(),
            Action::Down if row > 0 => blank - shape.cols(),
            Action::Left if col + 1 < shape.cols() => blank + 1,
            Action::Right if col > 0 => blank - 1,
            _ => return None,
        };
        let mut tiles = self.tiles.clone();
        tiles.swap(blank, swap);
        Some(State { tiles })
    }

    /// Generates all legal `(successor, action)` pairs, in the fixed order
    /// of `Action::ALL`.
    ///
    /// Every legal swap exchanges the blank with a tile, so a successor
    /// can never equal its input state.
    pub fn neighbors(&self, shape: Shape) -> Vec<(State, Action)> {
        let mut result = Vec::with_capacity(4);
        for action in Action::ALL {
            if let Some(next) = self.apply(shape, action) {
                debug_assert_ne!(next, *self);
                result.push((next, action));
            }
        }
        result
    }

    /// Renders the state as a grid of numbers, one row per line.
    pub fn to_grid_string(&self, shape: Shape) -> String {
        let mut out = String::new();
        for r in 0..shape.rows() {
            for c in 0..shape.cols() {
                if c > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{:2}", self.tiles[r * shape.cols() + c]));
            }
            out.push('\n');
        }
        out
    }
}

/// Tests whether `to` can be reached from `from` under the slide-move
/// model.
///
/// Each slide is a transposition of the blank with one tile, so it flips
/// the parity of the permutation carrying `from` onto `to`, and it moves
/// the blank to an orthogonally adjacent cell, flipping the parity of the
/// blank's `row + col`. The two parities therefore change in lockstep:
/// `to` is reachable iff the inversion parity of the relative permutation
/// equals the parity of the blank's taxicab displacement.
///
/// The strategies never consult this predicate; an unreachable goal simply
/// surfaces as frontier exhaustion. It exists so instance generators and
/// hosts can screen inputs up front.
pub fn is_reachable(shape: Shape, from: &State, to: &State) -> bool {
    let cells = shape.cells();
    debug_assert_eq!(from.tiles().len(), cells);
    debug_assert_eq!(to.tiles().len(), cells);

    // Rank each tile of `from` by its position in `to`; inversions of the
    // ranked sequence give the parity of the relative permutation.
    let mut position_in_to = vec![0usize; cells];
    for (i, &tile) in to.tiles().iter().enumerate() {
        position_in_to[tile as usize] = i;
    }
    let ranked: Vec<usize> = from
        .tiles()
        .iter()
        .map(|&tile| position_in_to[tile as usize])
        .collect();

    let mut inversions = 0usize;
    for i in 0..cells {
        for j in (i + 1)..cells {
            if ranked[j] < ranked[i] {
                inversions += 1;
            }
        }
    }

    let (from_row, from_col) = shape.row_col(from.blank_position());
    let (to_row, to_col) = shape.row_col(to.blank_position());
    let blank_parity = (from_row + from_col + to_row + to_col) % 2;

    inversions % 2 == blank_parity
}

/// A puzzle instance: a fixed grid shape bound to a start and goal state.
///
/// The shape never changes for the lifetime of the instance; start and
/// goal may be replaced between solves, and every replacement re-validates
/// the new state against the shape. Solvability is deliberately not
/// checked here: an unreachable pairing is a valid instance whose
/// strategies all report "no solution".
#[derive(Clone, Debug)]
pub struct Puzzle {
    shape: Shape,
    start: State,
    goal: State,
}

impl Puzzle {
    /// Creates an instance, validating both states against the shape.
    pub fn new(shape: Shape, start: State, goal: State) -> Result<Self, StateError> {
        validate(start.tiles(), shape)?;
        validate(goal.tiles(), shape)?;
        Ok(Puzzle { shape, start, goal })
    }

    /// The fixed grid shape of this instance.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The current start state.
    pub fn start(&self) -> &State {
        &self.start
    }

    /// The current goal state.
    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Replaces the start state, re-validating it against the shape.
    pub fn set_start(&mut self, start: State) -> Result<(), StateError> {
        validate(start.tiles(), self.shape)?;
        self.start = start;
        Ok(())
    }

    /// Replaces the goal state, re-validating it against the shape.
    pub fn set_goal(&mut self, goal: State) -> Result<(), StateError> {
        validate(goal.tiles(), self.shape)?;
        self.goal = goal;
        Ok(())
    }

    /// Whether `state` matches this instance's goal.
    pub fn is_goal(&self, state: &State) -> bool {
        *state == self.goal
    }

    /// Whether the goal lies in the start state's parity class.
    pub fn is_solvable(&self) -> bool {
        is_reachable(self.shape, &self.start, &self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tiles: &[u8], shape: Shape) -> State {
        State::new(tiles.to_vec(), shape).unwrap()
    }

    #[test]
    fn test_shape_accessors_and_row_col() {
        let shape = Shape::new(2, 3);
        assert_eq!(shape.rows(), 2);
        assert_eq!(shape.cols(), 3);
        assert_eq!(shape.cells(), 6);
        assert_eq!(shape.row_col(0), (0, 0));
        assert_eq!(shape.row_col(2), (0, 2));
        assert_eq!(shape.row_col(3), (1, 0));
        assert_eq!(shape.row_col(5), (1, 2));
        assert_eq!(format!("{}", shape), "2x3");
    }

    #[test]
    #[should_panic(expected = "at least two cells")]
    fn test_shape_rejects_single_cell() {
        Shape::new(1, 1);
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_shape_rejects_zero_dimension() {
        Shape::new(0, 3);
    }

    #[test]
    fn test_state_validation_wrong_length() {
        let shape = Shape::new(2, 3);
        assert_eq!(
            State::new(vec![1, 2, 3, 4, 0], shape),
            Err(StateError::WrongLength {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn test_state_validation_out_of_range() {
        let shape = Shape::new(2, 3);
        assert_eq!(
            State::new(vec![1, 2, 3, 4, 5, 6], shape),
            Err(StateError::OutOfRange { value: 6, cells: 6 })
        );
    }

    #[test]
    fn test_state_validation_duplicate() {
        let shape = Shape::new(2, 3);
        assert_eq!(
            State::new(vec![1, 2, 3, 4, 4, 0], shape),
            Err(StateError::Duplicate(4))
        );
    }

    #[test]
    fn test_solved_state_layout() {
        let shape = Shape::new(3, 3);
        let solved = State::solved(shape);
        assert_eq!(solved.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(solved.blank_position(), 8);
    }

    #[test]
    fn test_apply_respects_bounds() {
        let shape = Shape::new(2, 3);
        // Blank in the top-left corner: only Up and Left are legal.
        let corner = state(&[0, 1, 2, 3, 4, 5], shape);
        assert!(corner.apply(shape, Action::Up).is_some());
        assert!(corner.apply(shape, Action::Left).is_some());
        assert!(corner.apply(shape, Action::Down).is_none());
        assert!(corner.apply(shape, Action::Right).is_none());
    }

    #[test]
    fn test_apply_swaps_the_expected_tile() {
        let shape = Shape::new(2, 3);
        let s = state(&[1, 2, 3, 4, 5, 0], shape);
        // Tile 5, left of the blank, slides right.
        let next = s.apply(shape, Action::Right).unwrap();
        assert_eq!(next.tiles(), &[1, 2, 3, 4, 0, 5]);
        // Tile 3, above the blank, slides down.
        let next = s.apply(shape, Action::Down).unwrap();
        assert_eq!(next.tiles(), &[1, 2, 0, 4, 5, 3]);
        // The input state is untouched.
        assert_eq!(s.tiles(), &[1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_neighbor_counts_2x3_exhaustive() {
        let shape = Shape::new(2, 3);
        // One state per blank position; expected counts by blank cell.
        let expected = [2, 3, 2, 2, 3, 2];
        for blank in 0..6 {
            let mut tiles: Vec<u8> = Vec::new();
            let mut next = 1u8;
            for i in 0..6 {
                if i == blank {
                    tiles.push(0);
                } else {
                    tiles.push(next);
                    next += 1;
                }
            }
            let s = state(&tiles, shape);
            assert_eq!(
                s.neighbors(shape).len(),
                expected[blank],
                "blank at index {}",
                blank
            );
        }
    }

    #[test]
    fn test_neighbor_counts_3x3_corner_edge_interior() {
        let shape = Shape::new(3, 3);
        let corner = state(&[0, 1, 2, 3, 4, 5, 6, 7, 8], shape);
        let edge = state(&[1, 0, 2, 3, 4, 5, 6, 7, 8], shape);
        let interior = state(&[1, 2, 3, 4, 0, 5, 6, 7, 8], shape);
        assert_eq!(corner.neighbors(shape).len(), 2);
        assert_eq!(edge.neighbors(shape).len(), 3);
        assert_eq!(interior.neighbors(shape).len(), 4);
    }

    #[test]
    fn test_neighbors_never_return_the_input() {
        let shape = Shape::new(3, 3);
        let s = state(&[1, 2, 3, 4, 0, 5, 6, 7, 8], shape);
        for (successor, action) in s.neighbors(shape) {
            assert_ne!(successor, s, "action {} produced a no-op", action);
        }
    }

    #[test]
    fn test_reachability_identity_and_single_move() {
        let shape = Shape::new(2, 3);
        let a = state(&[1, 2, 3, 4, 5, 0], shape);
        assert!(is_reachable(shape, &a, &a));
        let b = a.apply(shape, Action::Right).unwrap();
        assert!(is_reachable(shape, &a, &b));
        assert!(is_reachable(shape, &b, &a));
    }

    #[test]
    fn test_reachability_rejects_adjacent_transposition() {
        // Swapping two adjacent tiles without moving the blank flips the
        // permutation parity but not the blank parity, landing in the
        // other parity class.
        let shape = Shape::new(2, 3);
        let a = state(&[1, 2, 3, 4, 5, 0], shape);
        let b = state(&[2, 1, 3, 4, 5, 0], shape);
        assert!(!is_reachable(shape, &a, &b));
    }

    #[test]
    fn test_scrambled_is_deterministic_and_reachable() {
        let shape = Shape::new(3, 3);
        let goal = State::solved(shape);
        let a = State::scrambled(shape, &goal, 42);
        let b = State::scrambled(shape, &goal, 42);
        assert_eq!(a, b, "same seed must produce the same state");
        assert!(is_reachable(shape, &a, &goal));

        let c = State::scrambled(shape, &goal, 43);
        assert!(is_reachable(shape, &c, &goal));
    }

    #[test]
    fn test_puzzle_setters_revalidate() {
        let shape = Shape::new(2, 3);
        let start = state(&[1, 2, 3, 4, 5, 0], shape);
        let goal = State::solved(shape);
        let mut puzzle = Puzzle::new(shape, start, goal).unwrap();

        let other_shape = Shape::new(3, 3);
        let too_big = State::solved(other_shape);
        assert_eq!(
            puzzle.set_start(too_big.clone()),
            Err(StateError::WrongLength {
                expected: 6,
                found: 9
            })
        );
        assert_eq!(
            puzzle.set_goal(too_big),
            Err(StateError::WrongLength {
                expected: 6,
                found: 9
            })
        );

        let replacement = state(&[0, 1, 2, 3, 4, 5], shape);
        assert!(puzzle.set_start(replacement.clone()).is_ok());
        assert_eq!(puzzle.start(), &replacement);
    }

    #[test]
    fn test_puzzle_is_solvable_matches_parity() {
        let shape = Shape::new(2, 3);
        let start = state(&[1, 2, 3, 4, 5, 0], shape);
        let solvable_goal = state(&[1, 2, 3, 4, 0, 5], shape);
        let unsolvable_goal = state(&[2, 1, 3, 4, 5, 0], shape);

        let puzzle = Puzzle::new(shape, start.clone(), solvable_goal).unwrap();
        assert!(puzzle.is_solvable());

        let puzzle = Puzzle::new(shape, start, unsolvable_goal).unwrap();
        assert!(!puzzle.is_solvable());
    }

    #[test]
    fn test_to_grid_string() {
        let shape = Shape::new(2, 3);
        let s = state(&[1, 2, 3, 4, 5, 0], shape);
        assert_eq!(s.to_grid_string(shape), " 1  2  3\n 4  5  0\n");
    }
}
