use crate::engine::{Shape, State};
use std::fmt;

/// Selects which estimate an informed search uses.
///
/// Both estimates are admissible for the unit-cost slide-move model, so A*
/// returns an optimal-length path with either; Manhattan distance is the
/// stronger of the two and usually expands far fewer nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Sum of per-tile taxicab distances to their goal cells.
    Manhattan,
    /// Count of non-blank tiles that are not on their goal cell.
    Misplaced,
}

impl Heuristic {
    /// Evaluates the selected estimate for `state` against `goal`.
    pub fn estimate(&self, state: &State, goal: &State, shape: Shape) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(state, goal, shape),
            Heuristic::Misplaced => misplaced_tiles(state, goal),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Misplaced => "misplaced",
        };
        write!(f, "{}", s)
    }
}

/// Sums, over every non-blank tile, the taxicab distance between the
/// tile's current cell and its cell in `goal`.
///
/// Each slide moves exactly one tile by one cell, changing that tile's
/// distance to its goal cell by at most 1, so the total never overestimates
/// the remaining move count (admissible) and shrinks by at most 1 per edge
/// (consistent).
///
/// Pure and stateless; evaluated on demand, never cached.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::{Shape, State};
/// use npuzzle_solver::heuristics::manhattan_distance;
///
/// let shape = Shape::new(2, 3);
/// let goal = State::solved(shape);
/// assert_eq!(manhattan_distance(&goal, &goal, shape), 0);
/// ```
pub fn manhattan_distance(state: &State, goal: &State, shape: Shape) -> u32 {
    let mut position_in_goal = vec![0usize; shape.cells()];
    for (i, &tile) in goal.tiles().iter().enumerate() {
        position_in_goal[tile as usize] = i;
    }

    let mut distance = 0u32;
    for (i, &tile) in state.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let (row, col) = shape.row_col(i);
        let (goal_row, goal_col) = shape.row_col(position_in_goal[tile as usize]);
        distance += row.abs_diff(goal_row) as u32;
        distance += col.abs_diff(goal_col) as u32;
    }
    distance
}

/// Counts the non-blank tiles whose current cell differs from their cell
/// in `goal`.
///
/// Admissible but weaker than `manhattan_distance`: a misplaced tile needs
/// at least one move, and a move relocates exactly one tile.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    state
        .tiles()
        .iter()
        .zip(goal.tiles().iter())
        .filter(|(&tile, &goal_tile)| tile != 0 && tile != goal_tile)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tiles: &[u8], shape: Shape) -> State {
        State::new(tiles.to_vec(), shape).unwrap()
    }

    #[test]
    fn test_both_heuristics_are_zero_at_goal() {
        for shape in [Shape::new(2, 3), Shape::new(3, 3), Shape::new(4, 4)] {
            let goal = State::solved(shape);
            assert_eq!(manhattan_distance(&goal, &goal, shape), 0);
            assert_eq!(misplaced_tiles(&goal, &goal), 0);
        }
    }

    #[test]
    fn test_manhattan_known_value() {
        let shape = Shape::new(3, 3);
        let goal = State::solved(shape);
        // Tile 8 swapped with the blank: one cell from home.
        let s = state(&[1, 2, 3, 4, 5, 6, 7, 0, 8], shape);
        assert_eq!(manhattan_distance(&s, &goal, shape), 1);

        // Tile 1 and tile 2 exchanged: each one cell from home.
        let s = state(&[2, 1, 3, 4, 5, 6, 7, 8, 0], shape);
        assert_eq!(manhattan_distance(&s, &goal, shape), 2);
    }

    #[test]
    fn test_manhattan_against_nonstandard_goal() {
        // The goal position of a tile is wherever it sits in `goal`, not
        // the canonical layout.
        let shape = Shape::new(2, 3);
        let goal = state(&[5, 4, 3, 2, 1, 0], shape);
        assert_eq!(manhattan_distance(&goal, &goal, shape), 0);

        let s = state(&[5, 4, 3, 2, 0, 1], shape);
        assert_eq!(manhattan_distance(&s, &goal, shape), 1);
    }

    #[test]
    fn test_misplaced_known_value() {
        let shape = Shape::new(3, 3);
        let goal = State::solved(shape);
        let s = state(&[2, 1, 3, 4, 5, 6, 7, 8, 0], shape);
        assert_eq!(misplaced_tiles(&s, &goal), 2);
    }

    #[test]
    fn test_misplaced_ignores_the_blank() {
        let shape = Shape::new(2, 3);
        let goal = State::solved(shape);
        // Blank is displaced but only tile 5 counts.
        let s = state(&[1, 2, 3, 4, 0, 5], shape);
        assert_eq!(misplaced_tiles(&s, &goal), 1);
        assert_eq!(manhattan_distance(&s, &goal, shape), 1);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        // Manhattan distance is at least the misplaced count on any state:
        // every misplaced tile contributes at least 1.
        let shape = Shape::new(3, 3);
        let goal = State::solved(shape);
        for seed in 0..20 {
            let s = State::scrambled(shape, &goal, seed);
            assert!(
                manhattan_distance(&s, &goal, shape) >= misplaced_tiles(&s, &goal),
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_estimate_dispatch() {
        let shape = Shape::new(3, 3);
        let goal = State::solved(shape);
        let s = state(&[1, 2, 3, 4, 5, 6, 7, 0, 8], shape);
        assert_eq!(
            Heuristic::Manhattan.estimate(&s, &goal, shape),
            manhattan_distance(&s, &goal, shape)
        );
        assert_eq!(
            Heuristic::Misplaced.estimate(&s, &goal, shape),
            misplaced_tiles(&s, &goal)
        );
    }
}
