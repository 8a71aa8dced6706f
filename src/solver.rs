//! Best-first search driver shared by all three strategies.
//!
//! Duplicate boards are filtered when they are popped, not when they are pushed:
//! a board may sit in the frontier several times, but only its first (lowest `f`)
//! copy is expanded. With an admissible, consistent heuristic that first copy
//! carries the optimal `g`, so no decrease-key is needed.
use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{expand, Board, GOAL};
use crate::frontier::Frontier;
use crate::heuristics::Strategy;
use crate::node::StateNode;

/// Observer called with `(board, g, h)` for every node about to be expanded.
pub type TraceSink<'a> = &'a mut dyn FnMut(&Board, u32, u32);

/// Result of one search run. Both variants are ordinary outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// The goal board was popped from the frontier.
    Succeeded {
        /// Number of moves in the solution found (optimal).
        depth: u32,
        /// Nodes expanded before the goal was popped.
        expanded_count: usize,
        /// Entries left in the frontier after popping the goal.
        frontier_size_at_goal: usize,
        /// Largest frontier size seen before any pop.
        max_frontier_size: usize,
    },
    /// The frontier emptied without reaching the goal; the initial board is
    /// not in the goal's component.
    Failed { expanded_count: usize },
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchResult::Succeeded { .. })
    }

    /// Solution length, if one was found.
    pub fn depth(&self) -> Option<u32> {
        match self {
            SearchResult::Succeeded { depth, .. } => Some(*depth),
            SearchResult::Failed { .. } => None,
        }
    }

    pub fn expanded_count(&self) -> usize {
        match self {
            SearchResult::Succeeded { expanded_count, .. }
            | SearchResult::Failed { expanded_count } => *expanded_count,
        }
    }
}

/// Runs best-first search from `initial_board` to [`GOAL`], ordering the frontier by
/// `g + h` under `strategy`.
///
/// The frontier and the set of expanded boards live only for this call, so
/// independent searches may run side by side.
///
/// # Arguments
/// * `initial_board`: Starting board. Must be a permutation of `0..=8`; this is not
///   checked here.
/// * `strategy`: Heuristic used for `h`.
/// * `trace_sink`: Optional observer, called once per expansion with the board and
///   its `g` and `h`.
///
/// # Returns
/// `SearchResult::Succeeded` with the optimal depth, or `SearchResult::Failed` once
/// every board reachable from `initial_board` has been expanded.
///
/// # Examples
/// ```
/// use eight_puzzle::board::Board;
/// use eight_puzzle::heuristics::Strategy;
/// use eight_puzzle::solver::run_search;
///
/// let board = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]);
/// let result = run_search(board, Strategy::Manhattan, None);
/// assert_eq!(result.depth(), Some(1));
/// ```
pub fn run_search(
    initial_board: Board,
    strategy: Strategy,
    mut trace_sink: Option<TraceSink<'_>>,
) -> SearchResult {
    debug!(%initial_board, %strategy, "search_start");

    let mut frontier = Frontier::new();
    let mut expanded: HashSet<Board> = HashSet::new();
    let mut expanded_count = 0usize;
    let mut max_frontier_size = 0usize;

    frontier.push(StateNode::root(initial_board, strategy));

    loop {
        max_frontier_size = max_frontier_size.max(frontier.len());
        let node = match frontier.pop() {
            Some(node) => node,
            None => break,
        };

        // Stale copy of a board that was already expanded at a lower f.
        if expanded.contains(&node.board) {
            continue;
        }

        if node.board == GOAL {
            let result = SearchResult::Succeeded {
                depth: node.g,
                expanded_count,
                frontier_size_at_goal: frontier.len(),
                max_frontier_size,
            };
            debug!(
                depth = node.g,
                expanded_count,
                frontier_size = frontier.len(),
                max_frontier_size,
                "search_succeeded"
            );
            return result;
        }

        trace!(board = %node.board, g = node.g, h = node.h, "expand");
        if let Some(sink) = trace_sink.as_deref_mut() {
            sink(&node.board, node.g, node.h);
        }

        for (child, move_cost) in expand(&node.board, &node.parent_board) {
            frontier.push(node.child(child, move_cost, strategy));
        }
        expanded.insert(node.board);
        expanded_count += 1;
    }

    debug!(expanded_count, max_frontier_size, "search_failed");
    SearchResult::Failed { expanded_count }
}

/// A search result together with its inputs and wall-clock time.
#[derive(Clone, Copy, Debug)]
pub struct SearchOutcome {
    pub initial_board: Board,
    pub strategy: Strategy,
    pub result: SearchResult,
    pub elapsed: Duration,
}

/// Runs [`run_search`] and measures how long it took.
pub fn run_timed_search(
    initial_board: Board,
    strategy: Strategy,
    trace_sink: Option<TraceSink<'_>>,
) -> SearchOutcome {
    let start = Instant::now();
    let result = run_search(initial_board, strategy, trace_sink);
    SearchOutcome {
        initial_board,
        strategy,
        result,
        elapsed: start.elapsed(),
    }
}

/// Formats one line of the expansion trace.
pub fn trace_line(board: &Board, g: u32, h: u32) -> String {
    format!(
        "The next state to expand has g(n) = {} and h(n) = {}:\n{}",
        g, h, board
    )
}

/// Formats the final report printed after a search.
impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            SearchResult::Succeeded {
                depth,
                expanded_count,
                frontier_size_at_goal,
                max_frontier_size,
            } => {
                writeln!(f, "Final board: {}", GOAL)?;
                writeln!(f, "Success!")?;
                writeln!(f, "Depth: {}", depth)?;
                writeln!(f, "Expanded Nodes: {}", expanded_count)?;
                writeln!(f, "Frontier Nodes: {}", frontier_size_at_goal)?;
                writeln!(f, "Max Queue Size: {}", max_frontier_size)?;
            }
            SearchResult::Failed { expanded_count } => {
                writeln!(f, "No solution exists!")?;
                writeln!(f, "Expanded Nodes: {}", expanded_count)?;
            }
        }
        write!(
            f,
            "-- {} seconds -- were used.",
            self.elapsed.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_PUZZLE: Board = Board::new([0, 7, 2, 4, 6, 1, 3, 5, 8]);
    /// Two non-blank tiles swapped: odd parity, unreachable from the goal.
    const UNSOLVABLE: Board = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]);
    /// Boards in each connected component of the 8-puzzle state graph (9!/2).
    const COMPONENT_SIZE: usize = 181_440;

    #[test]
    fn test_goal_board_is_solved_immediately() {
        for strategy in Strategy::ALL {
            let result = run_search(GOAL, strategy, None);
            assert_eq!(
                result,
                SearchResult::Succeeded {
                    depth: 0,
                    expanded_count: 0,
                    frontier_size_at_goal: 0,
                    max_frontier_size: 1,
                }
            );
        }
    }

    #[test]
    fn test_one_move_from_goal_manhattan() {
        let board = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let result = run_search(board, Strategy::Manhattan, None);
        assert_eq!(
            result,
            SearchResult::Succeeded {
                depth: 1,
                expanded_count: 1,
                frontier_size_at_goal: 2,
                max_frontier_size: 3,
            }
        );
    }

    #[test]
    fn test_one_move_from_goal_all_strategies() {
        let board = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        for strategy in Strategy::ALL {
            assert_eq!(run_search(board, strategy, None).depth(), Some(1));
        }
    }

    #[test]
    fn test_default_puzzle_same_depth_fewer_expansions() {
        let results: Vec<SearchResult> = Strategy::ALL
            .iter()
            .map(|&strategy| run_search(DEFAULT_PUZZLE, strategy, None))
            .collect();

        let depth = results[0].depth();
        assert!(depth.is_some());
        for result in &results {
            assert_eq!(result.depth(), depth);
        }

        let uniform = results[0].expanded_count();
        let misplaced = results[1].expanded_count();
        let manhattan = results[2].expanded_count();
        assert!(manhattan < uniform, "{} >= {}", manhattan, uniform);
        assert!(misplaced < uniform, "{} >= {}", misplaced, uniform);
    }

    #[test]
    fn test_scrambled_boards_agree_on_depth() {
        for seed in 0..8 {
            let steps = 12 + seed as usize;
            let board = Board::scrambled(seed, steps);
            let depths: Vec<Option<u32>> = Strategy::ALL
                .iter()
                .map(|&strategy| run_search(board, strategy, None).depth())
                .collect();
            let depth = depths[0].unwrap_or(u32::MAX);
            assert!(depth as usize <= steps, "seed {}", seed);
            assert!(depths.iter().all(|&d| d == Some(depth)), "seed {}", seed);
        }
    }

    #[test]
    fn test_unsolvable_board_fails_after_exhausting_component() {
        for strategy in Strategy::ALL {
            let result = run_search(UNSOLVABLE, strategy, None);
            assert_eq!(
                result,
                SearchResult::Failed {
                    expanded_count: COMPONENT_SIZE
                },
                "{}",
                strategy
            );
            assert!(!result.is_solved());
            assert_eq!(result.depth(), None);
        }
    }

    #[test]
    fn test_trace_sink_sees_every_expansion() {
        let mut seen: Vec<(Board, u32, u32)> = Vec::new();
        let mut sink = |board: &Board, g: u32, h: u32| seen.push((*board, g, h));
        let result = run_search(DEFAULT_PUZZLE, Strategy::Manhattan, Some(&mut sink));

        assert_eq!(seen.len(), result.expanded_count());
        assert_eq!(seen[0], (DEFAULT_PUZZLE, 0, 14));
        for (board, _, h) in &seen {
            assert_eq!(*h, Strategy::Manhattan.estimate(board));
            assert_ne!(*board, GOAL);
        }
        let unique: HashSet<Board> = seen.iter().map(|(b, _, _)| *b).collect();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn test_expanded_f_values_never_decrease() {
        let mut f_values = Vec::new();
        let mut sink = |_: &Board, g: u32, h: u32| f_values.push(g + h);
        run_search(Board::scrambled(99, 20), Strategy::Manhattan, Some(&mut sink));
        assert!(f_values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_parse_search_and_report() {
        let board: Board = "1 2 3 4 5 6 7 0 8".parse().unwrap();
        let outcome = run_timed_search(board, Strategy::MisplacedTile, None);
        assert_eq!(outcome.initial_board, board);
        assert_eq!(outcome.strategy, Strategy::MisplacedTile);

        let report = outcome.to_string();
        assert!(report.contains("Final board: [1, 2, 3, 4, 5, 6, 7, 8, 0]"));
        assert!(report.contains("Success!"));
        assert!(report.contains("Depth: 1"));
        assert!(report.contains("Expanded Nodes: 1"));
        assert!(report.contains("seconds -- were used."));
    }

    #[test]
    fn test_failed_report() {
        let outcome = SearchOutcome {
            initial_board: UNSOLVABLE,
            strategy: Strategy::UniformCost,
            result: SearchResult::Failed { expanded_count: 42 },
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(
            outcome.to_string(),
            "No solution exists!\nExpanded Nodes: 42\n-- 1.5 seconds -- were used."
        );
    }

    #[test]
    fn test_trace_line_format() {
        assert_eq!(
            trace_line(&DEFAULT_PUZZLE, 0, 14),
            "The next state to expand has g(n) = 0 and h(n) = 14:\n[0, 7, 2, 4, 6, 1, 3, 5, 8]"
        );
    }
}
