//! Error types for rules engine operations.

use std::fmt;

use super::{Color, GameStatus, Square};

/// Error type for piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// A rank describes more than 8 squares (rank is the 0-based group index, rank 8 first)
    RankOverflow { rank: usize, files: usize },
    /// A rank describes fewer than 8 squares
    IncompleteRank { rank: usize, files: usize },
    /// Each color needs exactly one king
    KingCount { color: Color, found: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::RankOverflow { rank, files } => {
                write!(f, "Too many files ({files}) in rank {}", 8 - rank)
            }
            PlacementError::IncompleteRank { rank, files } => {
                write!(f, "Too few files ({files}) in rank {}", 8 - rank)
            }
            PlacementError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Error type for textual move request parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters, optionally split by a space)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Why a requested move was not played. The session is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejected {
    /// The move is not in the legal-move set of its source square
    NotLegal { from: Square, to: Square },
    /// The game has ended; only undo or a new game are accepted
    GameOver { status: GameStatus },
}

impl fmt::Display for MoveRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejected::NotLegal { from, to } => write!(f, "Move {from}{to} is not legal"),
            MoveRejected::GameOver { status } => write!(f, "Game is over ({status})"),
        }
    }
}

impl std::error::Error for MoveRejected {}
