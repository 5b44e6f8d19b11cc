use std::fmt;

use crate::board::{parse_move_request, MoveParseError, PlacementError, Square, SquareError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start over, from the standard setup or the given placement
    New(Option<String>),
    Move { from: Square, to: Square },
    Moves(Square),
    Undo,
    Board,
    Status,
    History,
    Captures,
    Quit,
}

/// Error type for console input. Rejected moves are not errors here; the
/// console reports them on an `illegal` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A command was given without its required argument
    MissingArgument { command: &'static str },
    /// First word is not a known command or a move
    Unknown(String),
    InvalidSquare(SquareError),
    InvalidMove(MoveParseError),
    InvalidPlacement(PlacementError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument { command } => {
                write!(f, "'{command}' needs an argument")
            }
            CommandError::Unknown(line) => write!(f, "Unknown command '{line}'"),
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidMove(e) => write!(f, "{e}"),
            CommandError::InvalidPlacement(e) => write!(f, "Invalid placement: {e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidSquare(e) => Some(e),
            CommandError::InvalidMove(e) => Some(e),
            CommandError::InvalidPlacement(e) => Some(e),
            CommandError::MissingArgument { .. } | CommandError::Unknown(_) => None,
        }
    }
}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

impl From<MoveParseError> for CommandError {
    fn from(e: MoveParseError) -> Self {
        CommandError::InvalidMove(e)
    }
}

impl From<PlacementError> for CommandError {
    fn from(e: PlacementError) -> Self {
        CommandError::InvalidPlacement(e)
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// A bare coordinate move such as `e2e4` is accepted as `move e2e4`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    let Some((word, rest)) = split_first_word(trimmed) else {
        return Ok(None);
    };

    let cmd = match word {
        "new" => Command::New((!rest.is_empty()).then(|| rest.to_string())),
        "move" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument { command: "move" });
            }
            let (from, to) = parse_move_request(rest)?;
            Command::Move { from, to }
        }
        "moves" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument { command: "moves" });
            }
            Command::Moves(rest.parse()?)
        }
        "undo" => Command::Undo,
        "board" => Command::Board,
        "status" => Command::Status,
        "history" => Command::History,
        "captures" => Command::Captures,
        "quit" | "exit" => Command::Quit,
        _ => match parse_move_request(trimmed) {
            Ok((from, to)) => Command::Move { from, to },
            Err(_) => return Err(CommandError::Unknown(trimmed.to_string())),
        },
    };

    Ok(Some(cmd))
}

fn split_first_word(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_move_forms() {
        let expected = Some(Command::Move {
            from: Square(1, 4),
            to: Square(3, 4),
        });
        assert_eq!(parse_command("move e2e4"), Ok(expected.clone()));
        assert_eq!(parse_command("move e2 e4"), Ok(expected.clone()));
        assert_eq!(parse_command("e2e4"), Ok(expected));
    }

    #[test]
    fn test_new_with_and_without_placement() {
        assert_eq!(parse_command("new"), Ok(Some(Command::New(None))));
        assert_eq!(
            parse_command("new 4k3/8/8/8/8/8/8/4K3"),
            Ok(Some(Command::New(Some("4k3/8/8/8/8/8/8/4K3".to_string()))))
        );
    }

    #[test]
    fn test_moves_needs_square() {
        assert_eq!(
            parse_command("moves"),
            Err(CommandError::MissingArgument { command: "moves" })
        );
        assert_eq!(parse_command("moves g1"), Ok(Some(Command::Moves(Square(0, 6)))));
        assert!(matches!(
            parse_command("moves z9"),
            Err(CommandError::InvalidSquare(_))
        ));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_command("castle please").unwrap_err();
        assert_eq!(err, CommandError::Unknown("castle please".to_string()));
        assert!(err.to_string().contains("castle please"));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("undo"), Ok(Some(Command::Undo)));
        assert_eq!(parse_command(" board "), Ok(Some(Command::Board)));
        assert_eq!(parse_command("status"), Ok(Some(Command::Status)));
        assert_eq!(parse_command("history"), Ok(Some(Command::History)));
        assert_eq!(parse_command("captures"), Ok(Some(Command::Captures)));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
    }
}
