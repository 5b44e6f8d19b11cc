//! Chess rules: board representation, move generation, legality and game state.
//!
//! Positions are plain values. Legality is decided by applying each candidate
//! move to a copy ([`Position::after`]) and asking whether the mover's king is
//! attacked, so no probe ever mutates shared state. [`GameSession`] layers turn
//! order, capture bins, move notation and snapshot-based undo on top.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStatus, Position, Square};
//!
//! let position = Position::new();
//! let moves = position.all_legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(position.legal_moves(Square(1, 4)).len(), 2);
//! assert_eq!(position.status(Color::White), GameStatus::Ongoing { check: false });
//! ```

mod apply;
mod attack_tables;
mod attacks;
mod builder;
mod error;
mod history;
mod legality;
mod movegen;
mod notation;
mod placement;
mod session;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{MoveParseError, MoveRejected, PlacementError, SquareError};
pub use history::{CaptureBins, Snapshot};
pub use legality::GameStatus;
pub use placement::{parse_move_request, STANDARD_PLACEMENT};
pub use session::{GameSession, MoveRecord};
pub use state::{Board, EnPassantTarget, Position};
pub use types::{Color, Move, MoveKind, MoveList, MoveListIntoIter, Piece, PieceKind, Square};
