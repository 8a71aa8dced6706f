//! Error types for board construction and input parsing.

use thiserror::Error;

/// Reasons a sequence of tiles cannot be turned into a [`Board`](crate::board::Board).
///
/// The search itself never fails; these errors only come from validating
/// user-supplied input before a search is started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The input did not contain exactly nine tiles.
    #[error("Expected 9 tiles, found {found}")]
    WrongLength { found: usize },

    /// A token could not be read as a tile number.
    #[error("Unrecognized tile '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    /// A tile number outside `0..=8`.
    #[error("Tile {value} at position {position} is out of range (expected 0 to 8)")]
    OutOfRange { value: u32, position: usize },

    /// The same tile appears more than once.
    #[error("Tile {value} appears more than once")]
    DuplicateTile { value: u8 },
}
