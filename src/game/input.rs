//! Line-oriented player input.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::moves::{Move, MoveParseError};

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(undo|u|hint|h|quit|q|exit)$").expect("COMMAND_RE regex should be valid")
});

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveParseError),
}

/// One action requested by whoever is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Place(Move),
    UseEngine,
    Undo,
    Hint,
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if let Some(caps) = COMMAND_RE.captures(trimmed) {
            return match caps[1].to_ascii_lowercase().as_str() {
                "undo" | "u" => Ok(MoveInput::Undo),
                "hint" | "h" => Ok(MoveInput::Hint),
                _ => Ok(MoveInput::Quit),
            };
        }

        if trimmed.chars().next().map_or(false, |c| c.is_ascii_digit() || c == '(') {
            return Ok(MoveInput::Place(trimmed.parse::<Move>()?));
        }

        Err(InputError::InvalidInput {
            input: trimmed.to_string(),
        })
    }
}

/// Reads one line from stdin. End of input counts as quitting.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Ok(MoveInput::Quit),
        Ok(_) => input.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::error::BoardError;

    #[test]
    fn test_parse_place() {
        assert_eq!(
            MoveInput::from_str("7,8"),
            Ok(MoveInput::Place(Move::new(7, 8).unwrap()))
        );
        assert_eq!(
            MoveInput::from_str("  (0, 14)\n"),
            Ok(MoveInput::Place(Move::new(0, 14).unwrap()))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(MoveInput::from_str("undo"), Ok(MoveInput::Undo));
        assert_eq!(MoveInput::from_str("U"), Ok(MoveInput::Undo));
        assert_eq!(MoveInput::from_str("hint"), Ok(MoveInput::Hint));
        assert_eq!(MoveInput::from_str("Quit"), Ok(MoveInput::Quit));
        assert_eq!(MoveInput::from_str("exit"), Ok(MoveInput::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            MoveInput::from_str("castle"),
            Err(InputError::InvalidInput {
                input: "castle".to_string()
            })
        );
        assert_eq!(
            MoveInput::from_str("15,0"),
            Err(InputError::InvalidMove(MoveParseError::OutOfBounds(
                BoardError::OutOfBounds { row: 15, col: 0 }
            )))
        );
        assert!(matches!(
            MoveInput::from_str("7;7"),
            Err(InputError::InvalidMove(MoveParseError::InvalidFormat { .. }))
        ));
    }
}
