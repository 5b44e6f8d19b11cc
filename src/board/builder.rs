//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing placement
//! strings, and can mark pieces as already moved, which a placement string
//! cannot express.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(0, 7), Color::White, PieceKind::Rook)
//!     .moved(Square(0, 7))
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(position.piece_at(Square(0, 7)).unwrap().has_moved);
//! ```

use super::error::PlacementError;
use super::{Board, Color, EnPassantTarget, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    en_passant: Option<EnPassantTarget>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            en_passant: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_position(Position::new())
    }

    /// Start from an existing position, keeping its turn and en passant window.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        PositionBuilder {
            board: position.board,
            side_to_move: position.side_to_move,
            en_passant: position.en_passant,
        }
    }

    /// Start from a placement string.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        Ok(Self::from_position(Position::try_from_placement(placement)?))
    }

    /// Place an unmoved piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(square, Piece::new(kind, color));
        self
    }

    /// Mark the piece on `square` as having moved. No effect on an empty square.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        if let Some(piece) = self.board.piece_at(square) {
            self.board.set(square, piece.moved());
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.take(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Open an en passant window for the pawn on `square` that just advanced
    /// two squares in `color`'s direction.
    #[must_use]
    pub const fn en_passant(mut self, square: Square, color: Color) -> Self {
        self.en_passant = Some(EnPassantTarget {
            square,
            direction: color.pawn_direction(),
        });
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant = None;
        self
    }

    /// Build the position.
    ///
    /// The king count is not checked here; check, legality and status
    /// evaluation panic on a side without a king.
    #[must_use]
    pub fn build(self) -> Position {
        Position {
            board: self.board,
            side_to_move: self.side_to_move,
            en_passant: self.en_passant,
        }
    }
}
