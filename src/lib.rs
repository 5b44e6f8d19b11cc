//! Chess rules engine for a single local game.
//!
//! - [`board`]: positions, move generation, legality, game status and
//!   [`GameSession`](board::GameSession) with snapshot undo
//! - [`sync`]: a lock-guarded session handle for multi-threaded hosts
//! - [`console`]: a line-based text front end over stdin/stdout

#[macro_use]
mod logging;

pub mod board;
pub mod console;
pub mod sync;

pub use board::{
    Color, GameSession, GameStatus, Move, MoveKind, Piece, PieceKind, PlacementError, Position,
    Square,
};
pub use sync::SharedSession;
