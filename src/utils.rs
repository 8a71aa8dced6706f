use tracing_subscriber::EnvFilter;

use crate::board::{Board, BOARD_LEN};
use crate::error::BoardError;

/// Installs a stderr log subscriber for the binaries.
///
/// Honors `RUST_LOG`; defaults to `warn`. Safe to call more than once; only the
/// first call has an effect.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses a board from text such as `"1 2 3 4 5 6 7 8 0"`.
///
/// Tiles are read left to right, top to bottom, with `0` for the blank. They may be
/// separated by whitespace and/or commas, and the whole list may be wrapped in
/// square brackets, so a board printed as `[1, 2, 3, ...]` parses back unchanged.
///
/// # Returns
/// * `Ok(Board)` if the input holds exactly nine tiles forming a permutation of `0..=8`.
/// * `Err(BoardError)` describing the first problem found otherwise.
///
/// # Examples
/// ```
/// use eight_puzzle::board::{Board, GOAL};
/// use eight_puzzle::utils::board_from_str;
///
/// assert_eq!(board_from_str("1 2 3 4 5 6 7 8 0"), Ok(GOAL));
/// assert_eq!(
///     board_from_str("[0, 7, 2, 4, 6, 1, 3, 5, 8]"),
///     Ok(Board::new([0, 7, 2, 4, 6, 1, 3, 5, 8]))
/// );
/// assert!(board_from_str("1 2 3").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, BoardError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    let tokens: Vec<&str> = inner
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() != BOARD_LEN {
        return Err(BoardError::WrongLength {
            found: tokens.len(),
        });
    }

    let mut tiles = [0u8; BOARD_LEN];
    for (position, token) in tokens.iter().enumerate() {
        let value: u32 = token.parse().map_err(|_| BoardError::InvalidToken {
            token: token.to_string(),
            position,
        })?;
        tiles[position] = u8::try_from(value)
            .ok()
            .filter(|&v| (v as usize) < BOARD_LEN)
            .ok_or(BoardError::OutOfRange { value, position })?;
    }

    Board::try_from_tiles(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GOAL;

    #[test]
    fn test_board_from_str_valid() {
        let board = board_from_str("0 7 2 4 6 1 3 5 8").unwrap();
        assert_eq!(board.tiles(), &[0, 7, 2, 4, 6, 1, 3, 5, 8]);
        assert_eq!(board.blank_index(), 0);
    }

    #[test]
    fn test_board_from_str_extra_whitespace() {
        let board = board_from_str("  1  2 3\n4 5 6\t7 8 0 \n").unwrap();
        assert_eq!(board, GOAL);
    }

    #[test]
    fn test_board_from_str_round_trips_display() {
        let board = Board::new([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        assert_eq!(board_from_str(&board.to_string()), Ok(board));
    }

    #[test]
    fn test_board_from_str_wrong_length() {
        assert_eq!(
            board_from_str("1 2 3 4 5 6 7 8"),
            Err(BoardError::WrongLength { found: 8 })
        );
        assert_eq!(
            board_from_str("1 2 3 4 5 6 7 8 0 0"),
            Err(BoardError::WrongLength { found: 10 })
        );
        assert_eq!(board_from_str(""), Err(BoardError::WrongLength { found: 0 }));
    }

    #[test]
    fn test_board_from_str_invalid_token() {
        let result = board_from_str("1 2 3 4 x 6 7 8 0");
        assert_eq!(
            result,
            Err(BoardError::InvalidToken {
                token: "x".to_string(),
                position: 4
            })
        );
        assert!(board_from_str("-1 2 3 4 5 6 7 8 0").is_err());
    }

    #[test]
    fn test_board_from_str_out_of_range() {
        let result = board_from_str("1 2 3 4 5 6 7 9 0");
        assert_eq!(
            result,
            Err(BoardError::OutOfRange {
                value: 9,
                position: 7
            })
        );
        let result = board_from_str("1 2 3 4 5 6 7 300 0");
        assert!(result.unwrap_err().to_string().contains("Tile 300"));
    }

    #[test]
    fn test_board_from_str_duplicate() {
        let result = board_from_str("1 2 3 4 5 6 7 7 0");
        assert_eq!(result, Err(BoardError::DuplicateTile { value: 7 }));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Result<Board, _> = "1 2 3 4 5 6 7 8 0".parse();
        assert_eq!(board, Ok(GOAL));
    }
}
