//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `PieceKind`, `Color` and `Piece` - piece identity and move bookkeeping
//! - `Square` - (rank, file) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
