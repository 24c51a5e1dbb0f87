//! Board-size resolution.
//!
//! The simulation only needs a (width, height) pair: the rectangle filled by
//! random seeding and the area a named pattern is centred in. Sources are
//! tried in a fixed order: piped input, then the detected terminal size,
//! then [`DEFAULT_BOARD`].

use tracing::{debug, warn};

use crate::error::{LifeError, LifeResult};

/// Board dimensions in cells
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

/// Used when neither piped input nor the terminal provide a size
pub const DEFAULT_BOARD: BoardSize = BoardSize { width: 20, height: 10 };

/// Where the resolved board size came from
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SizeSource {
    Piped,
    Terminal,
    Default,
}

impl BoardSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Parse piped size input: two positive integers, rows first then columns
pub fn parse_board_size(input: &str) -> LifeResult<BoardSize> {
    let malformed = || LifeError::MalformedBoardSizeInput(input.trim().to_owned());

    let mut parts = input.split_whitespace();
    let (Some(rows), Some(cols), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let parse = |s: &str| s.parse::<usize>().ok().filter(|&n| n > 0);
    match (parse(rows), parse(cols)) {
        (Some(height), Some(width)) => Ok(BoardSize { width, height }),
        _ => Err(malformed()),
    }
}

/// Pick the board size from the available sources.
/// Malformed piped input is logged and skipped, never returned as an error.
pub fn resolve_board_size(piped: Option<&str>, detected: Option<BoardSize>) -> (BoardSize, SizeSource) {
    if let Some(input) = piped {
        match parse_board_size(input) {
            Ok(size) => {
                debug!(?size, "board size from piped input");
                return (size, SizeSource::Piped);
            }
            Err(err) => warn!(%err, "ignoring piped board size"),
        }
    }

    match detected.filter(|s| s.width > 0 && s.height > 0) {
        Some(size) => {
            debug!(?size, "board size from terminal");
            (size, SizeSource::Terminal)
        }
        None => (DEFAULT_BOARD, SizeSource::Default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_then_columns() {
        assert_eq!(parse_board_size("10 40\n"), Ok(BoardSize::new(40, 10)));
        assert_eq!(parse_board_size("  7\t\n3 "), Ok(BoardSize::new(3, 7)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for input in ["", "12", "1 2 3", "0 5", "5 -1", "a b", "3.5 4"] {
            assert!(
                matches!(parse_board_size(input), Err(LifeError::MalformedBoardSizeInput(_))),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_piped_input_has_priority() {
        let (size, source) = resolve_board_size(Some("5 6"), Some(BoardSize::new(80, 24)));
        assert_eq!(size, BoardSize::new(6, 5));
        assert_eq!(source, SizeSource::Piped);
    }

    #[test]
    fn test_malformed_piped_input_falls_back_to_terminal() {
        let (size, source) = resolve_board_size(Some("oops"), Some(BoardSize::new(80, 24)));
        assert_eq!(size, BoardSize::new(80, 24));
        assert_eq!(source, SizeSource::Terminal);
    }

    #[test]
    fn test_falls_back_to_default() {
        assert_eq!(resolve_board_size(Some("1"), None), (DEFAULT_BOARD, SizeSource::Default));
        assert_eq!(
            resolve_board_size(None, Some(BoardSize::new(0, 24))),
            (DEFAULT_BOARD, SizeSource::Default)
        );
    }
}
