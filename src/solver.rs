//! Search strategies over sliding-tile puzzle states.
//!
//! Three interchangeable strategies consume the same `Puzzle` instance:
//! breadth-first search, iterative deepening depth-first search, and A*
//! with a selectable heuristic. All three return an optimal-length move
//! sequence on solvable instances; when several optimal paths exist they
//! may pick different ones, differing only in traversal tie-breaks.

use crate::engine::{Action, Puzzle, Shape, State};
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// Selects a search strategy for `solve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first search. Optimal; frontier grows with the state space.
    Bfs,
    /// Iterative deepening depth-first search. Optimal with O(depth)
    /// memory; `depth_limit` caps the deepening so unsolvable instances
    /// terminate (`None` deepens without bound, relying on solvability).
    Ids { depth_limit: Option<u32> },
    /// A* with the given heuristic. Optimal; usually expands the fewest
    /// nodes.
    AStar(Heuristic),
}

/// A solution found by one of the search strategies.
///
/// `moves` is empty when the start state already matches the goal. A
/// strategy that exhausts its frontier (or its depth budget, for IDS)
/// reports "no solution" as `None`, never as a partial `Solution`.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The action sequence carrying the start state onto the goal.
    pub moves: Vec<Action>,
    /// Number of states expanded while searching, for strategy comparison.
    pub expanded: u64,
}

impl Solution {
    /// The move sequence in compact single-letter form, e.g. `"R U L"`.
    pub fn letters(&self) -> String {
        self.moves
            .iter()
            .map(|m| m.letter().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runs the selected strategy against the puzzle instance.
pub fn solve(puzzle: &Puzzle, strategy: Strategy) -> Option<Solution> {
    match strategy {
        Strategy::Bfs => solve_bfs(puzzle),
        Strategy::Ids { depth_limit } => solve_ids(puzzle, depth_limit),
        Strategy::AStar(heuristic) => solve_astar(puzzle, heuristic),
    }
}

/// Solves the puzzle with breadth-first search.
///
/// The frontier is a FIFO queue of `(state, path)` pairs; states are
/// marked visited on first discovery. Since every move costs 1, states are
/// expanded in non-decreasing path-length order and the first goal match
/// is a fewest-moves solution. Returns `None` only when the whole parity
/// class of the start state has been exhausted without meeting the goal.
pub fn solve_bfs(puzzle: &Puzzle) -> Option<Solution> {
    let shape = puzzle.shape();
    let mut expanded = 0u64;
    let mut frontier = VecDeque::new();
    let mut visited = HashSet::new();
    frontier.push_back((puzzle.start().clone(), Vec::new()));
    visited.insert(puzzle.start().clone());

    while let Some((state, path)) = frontier.pop_front() {
        expanded += 1;
        if puzzle.is_goal(&state) {
            return Some(Solution {
                moves: path,
                expanded,
            });
        }
        for (next, action) in state.neighbors(shape) {
            if visited.contains(&next) {
                continue;
            }
            visited.insert(next.clone());
            let mut next_path = path.clone();
            next_path.push(action);
            frontier.push_back((next, next_path));
        }
    }
    None
}

/// Solves the puzzle with iterative deepening depth-first search.
///
/// The depth bound starts at 0 and increments after every failed
/// depth-limited pass, so the first bound at which any solution exists
/// yields an optimal-length path. Memory stays proportional to the bound
/// rather than to the frontier size, which is the whole point of offering
/// this strategy next to BFS.
///
/// On an unreachable goal the deepening never ends, so `depth_limit` is
/// the external budget the caller imposes: `Some(d)` turns exhaustion of
/// every bound up to `d` into an ordinary `None` result, while `None`
/// deepens forever and must only be used on inputs known to be solvable.
pub fn solve_ids(puzzle: &Puzzle, depth_limit: Option<u32>) -> Option<Solution> {
    let mut expanded = 0u64;
    let mut bound = 0u32;
    loop {
        let mut visited = HashSet::new();
        visited.insert(puzzle.start().clone());
        let mut path = Vec::new();
        if let Some(moves) = depth_limited(
            puzzle,
            puzzle.start(),
            bound,
            &mut visited,
            &mut path,
            &mut expanded,
        ) {
            return Some(Solution { moves, expanded });
        }
        match depth_limit {
            Some(limit) if bound >= limit => return None,
            _ => bound += 1,
        }
    }
}

// Depth-limited DFS with a path-local visited set: states are marked on
// recursive entry and unmarked on backtrack, so the same state may be
// revisited along a different branch at the same bound. Returns the first
// solution found in neighbor order.
fn depth_limited(
    puzzle: &Puzzle,
    state: &State,
    depth: u32,
    visited: &mut HashSet<State>,
    path: &mut Vec<Action>,
    expanded: &mut u64,
) -> Option<Vec<Action>> {
    *expanded += 1;
    if puzzle.is_goal(state) {
        return Some(path.clone());
    }
    if depth == 0 {
        return None;
    }
    for (next, action) in state.neighbors(puzzle.shape()) {
        if visited.contains(&next) {
            continue;
        }
        visited.insert(next.clone());
        path.push(action);
        let result = depth_limited(puzzle, &next, depth - 1, visited, path, expanded);
        path.pop();
        if result.is_some() {
            return result;
        }
        visited.remove(&next);
    }
    None
}

// Frontier entry for A*, min-ordered by f = g + h. `BinaryHeap` is a
// max-heap, so the f comparison is reversed; among equal-f entries the
// deeper node (larger g) is preferred, which reaches the goal sooner.
#[derive(Debug)]
struct AStarNode {
    f: u32,
    g: u32,
    state: State,
    path: Vec<Action>,
}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g
    }
}

impl Eq for AStarNode {}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| self.g.cmp(&other.g))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Solves the puzzle with A* under the given heuristic.
///
/// Pops the lowest `f = g + h` entry, where `g` is the path length so far
/// and `h` the heuristic estimate. A popped goal state carries an
/// optimal-length path because both heuristics are admissible.
///
/// States are closed on first discovery rather than on expansion. That is
/// only sound because every edge costs exactly 1 and both heuristics are
/// consistent, making the first discovered `g` already optimal; a weighted
/// variant would have to reintroduce the textbook reopening rule.
pub fn solve_astar(puzzle: &Puzzle, heuristic: Heuristic) -> Option<Solution> {
    let shape = puzzle.shape();
    let goal = puzzle.goal();
    let mut expanded = 0u64;
    let mut frontier = BinaryHeap::new();
    let mut visited = HashSet::new();

    frontier.push(AStarNode {
        f: heuristic.estimate(puzzle.start(), goal, shape),
        g: 0,
        state: puzzle.start().clone(),
        path: Vec::new(),
    });
    visited.insert(puzzle.start().clone());

    while let Some(AStarNode { g, state, path, .. }) = frontier.pop() {
        expanded += 1;
        if puzzle.is_goal(&state) {
            return Some(Solution {
                moves: path,
                expanded,
            });
        }
        for (next, action) in state.neighbors(shape) {
            if visited.contains(&next) {
                continue;
            }
            visited.insert(next.clone());
            let next_g = g + 1;
            let h = heuristic.estimate(&next, goal, shape);
            let mut next_path = path.clone();
            next_path.push(action);
            frontier.push(AStarNode {
                f: next_g + h,
                g: next_g,
                state: next,
                path: next_path,
            });
        }
    }
    None
}

/// Applies `moves` to `start` one action at a time.
///
/// Returns `None` if any action is illegal from the state it is applied
/// to. Replaying a strategy's solution from the puzzle's start state must
/// reproduce the goal exactly.
pub fn replay(shape: Shape, start: &State, moves: &[Action]) -> Option<State> {
    let mut state = start.clone();
    for &action in moves {
        state = state.apply(shape, action)?;
    }
    Some(state)
}
