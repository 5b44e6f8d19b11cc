use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

/// 8x8 mapping from square to optional piece, indexed `[rank][file]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board::default()
    }

    /// The standard initial setup, nothing moved.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            board.set(Square(0, file), Piece::new(*kind, Color::White));
            board.set(Square(7, file), Piece::new(*kind, Color::Black));
            board.set(Square(1, file), Piece::new(PieceKind::Pawn, Color::White));
            board.set(Square(6, file), Piece::new(PieceKind::Pawn, Color::Black));
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Color of the piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    pub(crate) fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.0][sq.1] = Some(piece);
    }

    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1].take()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color with their pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = self
                    .piece_at(Square(rank, file))
                    .map_or('.', Piece::to_placement_char);
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

/// Pawn that just advanced two squares and may be captured en passant on the next ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnPassantTarget {
    /// Where the double-pushed pawn now stands
    pub square: Square,
    /// That pawn's forward direction (+1 White, -1 Black)
    pub direction: isize,
}

impl EnPassantTarget {
    /// The square the pawn skipped over; an en passant capture lands here.
    #[must_use]
    pub fn capture_square(self) -> Square {
        Square((self.square.0 as isize - self.direction) as usize, self.square.1)
    }
}

/// Rules state of a game: the board, who moves, and the en passant window.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<EnPassantTarget>,
}

impl Position {
    /// Standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Position::from_board(Board::standard())
    }

    /// Wrap a board with White to move and no en passant window.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Position {
            board,
            side_to_move: Color::White,
            en_passant: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<EnPassantTarget> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_layout() {
        let board = Board::standard();
        assert_eq!(
            board.piece_at(Square(0, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Square(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.count(PieceKind::Pawn, Color::Black), 8);
        assert!(board.pieces().all(|(_, p)| !p.has_moved));
    }

    #[test]
    fn test_take_empties_square() {
        let mut board = Board::standard();
        let knight = board.take(Square(0, 1));
        assert_eq!(knight.map(|p| p.kind), Some(PieceKind::Knight));
        assert!(board.is_empty(Square(0, 1)));
        assert_eq!(board.take(Square(0, 1)), None);
    }

    #[test]
    fn test_en_passant_capture_square() {
        let white = EnPassantTarget {
            square: Square(3, 4),
            direction: 1,
        };
        assert_eq!(white.capture_square(), Square(2, 4));
        let black = EnPassantTarget {
            square: Square(4, 5),
            direction: -1,
        };
        assert_eq!(black.capture_square(), Square(5, 5));
    }

    #[test]
    fn test_board_display_grid() {
        let text = Board::standard().to_string();
        assert!(text.contains("8 | r n b q k b n r |"));
        assert!(text.contains("1 | R N B Q K B N R |"));
        assert!(text.ends_with("a b c d e f g h"));
    }
}
