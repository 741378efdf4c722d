use crate::engine::{Shape, State, StateError};
use thiserror::Error;

/// Errors produced while turning text into a puzzle state.
///
/// Permutation violations are reported through the wrapped `StateError`
/// so callers see the same taxonomy whether a state arrives as text or as
/// an already-built tile sequence.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseStateError {
    /// A token is not a non-negative integer that fits a tile value.
    #[error("'{0}' is not a valid tile number")]
    NotANumber(String),
    /// The parsed sequence is not a permutation of `0..cells`.
    #[error(transparent)]
    Invalid(#[from] StateError),
}

/// Parses a whitespace-separated list of tile numbers into a validated
/// `State`.
///
/// This is the input-validation boundary of the engine: any sequence that
/// is the wrong length, contains an out-of-range value, or repeats a value
/// is rejected here, so the search strategies can assume every `State`
/// they receive is a proper permutation.
///
/// # Arguments
/// * `text`: Tile values separated by any whitespace, row-major, with `0`
///   for the blank. For a 2x3 puzzle: `"1 2 3 4 5 0"`.
/// * `shape`: The grid the state must fit.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::Shape;
/// use npuzzle_solver::utils::parse_state;
///
/// let shape = Shape::new(2, 3);
/// let state = parse_state("1 2 3 4 5 0", shape).unwrap();
/// assert_eq!(state.tiles(), &[1, 2, 3, 4, 5, 0]);
///
/// assert!(parse_state("1 2 3 4 5", shape).is_err());
/// assert!(parse_state("1 2 3 4 5 x", shape).is_err());
/// ```
pub fn parse_state(text: &str, shape: Shape) -> Result<State, ParseStateError> {
    let mut tiles = Vec::with_capacity(shape.cells());
    for token in text.split_whitespace() {
        let value: u8 = token
            .parse()
            .map_err(|_| ParseStateError::NotANumber(token.to_string()))?;
        tiles.push(value);
    }
    Ok(State::new(tiles, shape)?)
}
