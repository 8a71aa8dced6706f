//! # 8-Puzzle Solver Library
//!
//! This library finds optimal solutions to the sliding 8-puzzle with best-first
//! graph search, under one of three evaluation strategies: uniform-cost search and
//! A* with the misplaced-tile or Manhattan-distance heuristic.
//!
//! It is used by three binaries:
//! - `interactive`: Prompts for a puzzle, an algorithm and a trace option, then
//!   prints the search statistics.
//! - `solver`: The same search driven by command-line arguments.
//! - `heuristic_evaluator`: Compares the three strategies over seeded random boards.
//!
//! ## Modules
//! - `board`: The board representation (`Board`), the goal board, and move generation (`expand`).
//! - `heuristics`: The evaluation strategies (`Strategy`) and their heuristic functions.
//! - `node`: Search-tree nodes (`StateNode`).
//! - `frontier`: The priority-ordered frontier with FIFO tie-breaking.
//! - `solver`: The search driver (`run_search`) and its result types.
//! - `utils`: Parsing boards from text input.
//! - `error`: Error types for board validation.

pub mod board;
pub mod error;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod solver;
pub mod utils;

// Items should be accessed via their module path, e.g. `eight_puzzle::solver::run_search`.
