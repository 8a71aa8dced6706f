//! Board representation and move generation for the 8-puzzle.
//!
//! This module defines:
//! - `Board`: an immutable 3x3 arrangement of the tiles `0..=8`, with `0` as the blank.
//! - `GOAL`: the solved arrangement `[1, 2, 3, 4, 5, 6, 7, 8, 0]`.
//! - `expand`: the move-generation rule used by the search driver.
//!
//! Every operation that changes the arrangement returns a new `Board`; nothing is
//! mutated in place.
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Width (and height) of the square grid.
pub const BOARD_WIDTH: usize = 3;

/// Number of cells on the board.
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Tile value that marks the blank cell.
pub const BLANK: u8 = 0;

/// Cost of a single move. The state space is unit-cost.
pub const MOVE_COST: u32 = 1;

/// The solved board.
pub const GOAL: Board = Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]);

/// Cells adjacent to each cell (up, left, right, down order as seen from the blank),
/// clipped at the edges of the grid.
const NEIGHBORS: [&[usize]; BOARD_LEN] = [
    &[1, 3],
    &[0, 2, 4],
    &[1, 5],
    &[0, 4, 6],
    &[1, 3, 5, 7],
    &[2, 4, 8],
    &[3, 7],
    &[4, 6, 8],
    &[5, 7],
];

/// A 3x3 puzzle state stored in row-major order.
///
/// A `Board` is always expected to hold a permutation of `0..=8`. [`Board::new`] does
/// not check this; use [`Board::try_from_tiles`] (or `str::parse`) on untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; BOARD_LEN],
}

impl Board {
    /// Wraps a tile array without validating it.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::board::{Board, GOAL};
    /// assert_eq!(Board::new([1, 2, 3, 4, 5, 6, 7, 8, 0]), GOAL);
    /// ```
    pub const fn new(tiles: [u8; BOARD_LEN]) -> Self {
        Board { tiles }
    }

    /// Builds a board after checking that `tiles` is a permutation of `0..=8`.
    ///
    /// # Returns
    /// * `Ok(Board)` when every value in `0..=8` appears exactly once.
    /// * `Err(BoardError::OutOfRange)` for a value above 8.
    /// * `Err(BoardError::DuplicateTile)` when a value is repeated.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::board::Board;
    /// use eight_puzzle::error::BoardError;
    ///
    /// assert!(Board::try_from_tiles([0, 7, 2, 4, 6, 1, 3, 5, 8]).is_ok());
    /// assert_eq!(
    ///     Board::try_from_tiles([1, 1, 3, 4, 5, 6, 7, 8, 0]),
    ///     Err(BoardError::DuplicateTile { value: 1 })
    /// );
    /// ```
    pub fn try_from_tiles(tiles: [u8; BOARD_LEN]) -> Result<Self, BoardError> {
        let mut seen = [false; BOARD_LEN];
        for (position, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::OutOfRange {
                    value: u32::from(value),
                    position,
                })?;
            if *slot {
                return Err(BoardError::DuplicateTile { value });
            }
            *slot = true;
        }
        Ok(Board { tiles })
    }

    /// Returns the tiles in row-major order.
    pub fn tiles(&self) -> &[u8; BOARD_LEN] {
        &self.tiles
    }

    /// Returns the tile at `index` (row-major).
    ///
    /// # Panics
    /// Panics if `index >= BOARD_LEN`.
    pub fn tile(&self, index: usize) -> u8 {
        self.tiles[index]
    }

    /// Returns the index of the blank cell.
    pub fn blank_index(&self) -> usize {
        match self.tiles.iter().position(|&t| t == BLANK) {
            Some(index) => index,
            None => unreachable!("board {:?} has no blank tile", self.tiles),
        }
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Returns a new board with the tiles at `a` and `b` exchanged.
    ///
    /// `self` is left untouched, and swapping the same pair twice restores the
    /// original board.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::board::{Board, GOAL};
    /// let almost = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]);
    /// assert_eq!(almost.swap(7, 8), GOAL);
    /// assert_eq!(almost.swap(7, 8).swap(7, 8), almost);
    /// ```
    pub fn swap(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles;
        tiles.swap(a, b);
        Board { tiles }
    }

    /// Number of pairs of non-blank tiles that appear in the wrong relative order.
    pub fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != BLANK)
            .map(|(i, &value)| {
                self.tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != BLANK && next < value)
                    .count()
            })
            .sum()
    }

    /// Whether the goal board is reachable from this board.
    ///
    /// On an odd-width grid every move preserves inversion parity, and the goal has
    /// zero inversions, so exactly the boards with an even inversion count are
    /// solvable.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// Builds a board by walking the blank `steps` random moves away from the goal.
    ///
    /// The walk never immediately undoes its previous move, though longer cycles
    /// can still bring it back closer to the goal. The result is always solvable,
    /// and the same `(seed, steps)` pair always produces the same board.
    pub fn scrambled(seed: u64, steps: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = GOAL;
        let mut previous = GOAL;
        for _ in 0..steps {
            let candidates = expand(&current, &previous);
            if let Some(&(next, _)) = candidates.choose(&mut rng) {
                previous = current;
                current = next;
            }
        }
        current
    }

    /// Builds a uniformly shuffled solvable board from `seed`.
    ///
    /// Shuffles are retried until one with even inversion parity comes up.
    pub fn random_with_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut tiles = GOAL.tiles;
        loop {
            tiles.shuffle(&mut rng);
            let board = Board { tiles };
            if board.is_solvable() {
                return board;
            }
        }
    }

    /// Renders the board as a 3x3 grid, showing the blank as `.`.
    pub fn to_grid_string(&self) -> String {
        let mut output = String::new();
        for row in self.tiles.chunks(BOARD_WIDTH) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == BLANK {
                        ".".to_string()
                    } else {
                        t.to_string()
                    }
                })
                .collect();
            output.push_str(&cells.join(" "));
            output.push('\n');
        }
        output
    }
}

/// Formats the board as a flat row-major list, e.g. `[1, 2, 3, 4, 5, 6, 7, 8, 0]`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.tiles)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::board_from_str(s)
    }
}

/// Generates the children of `board`, skipping the one equal to `parent_board`.
///
/// Each child is `board` with the blank exchanged for one of its grid neighbors,
/// giving 2 candidates for a corner blank, 3 for an edge blank and 4 for the
/// center. Only the immediate undo move is suppressed here; longer cycles are left
/// to the caller. Every child costs [`MOVE_COST`].
///
/// # Arguments
/// * `board`: The board being expanded.
/// * `parent_board`: The board `board` was generated from. Passing `board` itself
///   suppresses nothing.
///
/// # Examples
/// ```
/// use eight_puzzle::board::{expand, Board};
/// let board = Board::new([0, 7, 2, 4, 6, 1, 3, 5, 8]);
/// let children = expand(&board, &board);
/// assert_eq!(children.len(), 2);
/// assert_eq!(children[0].0, Board::new([7, 0, 2, 4, 6, 1, 3, 5, 8]));
/// ```
pub fn expand(board: &Board, parent_board: &Board) -> Vec<(Board, u32)> {
    let blank = board.blank_index();
    NEIGHBORS[blank]
        .iter()
        .map(|&neighbor| board.swap(blank, neighbor))
        .filter(|child| child != parent_board)
        .map(|child| (child, MOVE_COST))
        .collect()
}
