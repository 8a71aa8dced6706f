//! Heuristic estimates of the remaining distance to the goal board.
//!
//! All three strategies are admissible and consistent for the unit-cost 8-puzzle,
//! so the search driver returns an optimal solution whichever one is chosen.
//! `manhattan` dominates `misplaced_tile`, which dominates `uniform_cost`.
use clap::ValueEnum;
use std::fmt;

use crate::board::{Board, BLANK, BOARD_LEN, BOARD_WIDTH, GOAL};

/// The evaluation strategy used to order the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// h = 0 everywhere; the search degenerates to uniform-cost search.
    UniformCost,
    /// A* with the misplaced-tile count.
    MisplacedTile,
    /// A* with the sum of Manhattan distances.
    Manhattan,
}

impl Strategy {
    /// All strategies, weakest heuristic first.
    pub const ALL: [Strategy; 3] = [
        Strategy::UniformCost,
        Strategy::MisplacedTile,
        Strategy::Manhattan,
    ];

    /// Estimates the number of moves from `board` to the goal.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::board::Board;
    /// use eight_puzzle::heuristics::Strategy;
    ///
    /// let board = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]);
    /// assert_eq!(Strategy::UniformCost.estimate(&board), 0);
    /// assert_eq!(Strategy::MisplacedTile.estimate(&board), 1);
    /// assert_eq!(Strategy::Manhattan.estimate(&board), 1);
    /// ```
    pub fn estimate(&self, board: &Board) -> u32 {
        match self {
            Strategy::UniformCost => uniform_cost(board),
            Strategy::MisplacedTile => misplaced_tile(board),
            Strategy::Manhattan => manhattan(board),
        }
    }

    /// Maps the interactive menu digits ("1", "2", "3") to a strategy.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Strategy::UniformCost),
            "2" => Some(Strategy::MisplacedTile),
            "3" => Some(Strategy::Manhattan),
            _ => None,
        }
    }

    /// Human-readable algorithm name.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::UniformCost => "Uniform Cost",
            Strategy::MisplacedTile => "A* - Misplaced Tile",
            Strategy::Manhattan => "A* - Manhattan",
        }
    }
}

/// Formats as the snake_case strategy name, e.g. `misplaced_tile`.
impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::UniformCost => "uniform_cost",
            Strategy::MisplacedTile => "misplaced_tile",
            Strategy::Manhattan => "manhattan",
        };
        write!(f, "{}", s)
    }
}

pub fn uniform_cost(_board: &Board) -> u32 {
    0
}

/// Counts the cells `0..8` that do not hold their goal tile.
///
/// The last cell (the blank's goal cell) is not counted, so a blank sitting anywhere
/// else counts as one misplaced cell while a tile sitting in the last cell does not.
pub fn misplaced_tile(board: &Board) -> u32 {
    board.tiles()[..BOARD_LEN - 1]
        .iter()
        .zip(GOAL.tiles().iter())
        .filter(|(tile, goal)| tile != goal)
        .count() as u32
}

/// Sums, over every non-blank tile, the grid distance from its cell to its goal cell.
///
/// Tile `v` belongs at index `v - 1`.
pub fn manhattan(board: &Board) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(|(index, &value)| {
            let target = (value - 1) as usize;
            let dx = (index % BOARD_WIDTH).abs_diff(target % BOARD_WIDTH);
            let dy = (index / BOARD_WIDTH).abs_diff(target / BOARD_WIDTH);
            (dx + dy) as u32
        })
        .sum()
}
