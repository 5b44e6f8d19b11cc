//! Piece, piece kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Parse a piece kind from a placement character, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Notation letter: uppercase, empty for pawns.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank, the opponent's back rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> usize {
        self.opponent().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
///
/// `has_moved` only ever goes from `false` to `true` while a game is played;
/// undo restores whole snapshots rather than clearing it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Parse a placement character: uppercase is White, lowercase is Black.
    #[must_use]
    pub fn from_placement_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Placement character, uppercase for White
    #[must_use]
    pub fn to_placement_char(self) -> char {
        let c = self.kind.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_placement_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_char_case_sets_color() {
        let white = Piece::from_placement_char('N').unwrap();
        let black = Piece::from_placement_char('q').unwrap();
        assert_eq!(white, Piece::new(PieceKind::Knight, Color::White));
        assert_eq!(black, Piece::new(PieceKind::Queen, Color::Black));
        assert!(!white.has_moved);
        assert_eq!(white.to_placement_char(), 'N');
        assert_eq!(black.to_placement_char(), 'q');
    }

    #[test]
    fn test_unknown_placement_char() {
        assert!(Piece::from_placement_char('x').is_none());
        assert!(Piece::from_placement_char('1').is_none());
    }

    #[test]
    fn test_pawn_has_no_letter() {
        assert_eq!(PieceKind::Pawn.letter(), None);
        assert_eq!(PieceKind::Knight.letter(), Some('N'));
        assert_eq!(PieceKind::King.letter(), Some('K'));
    }

    #[test]
    fn test_color_geometry() {
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
        assert_eq!(Color::Black.pawn_direction(), -1);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn test_moved_is_sticky() {
        let rook = Piece::new(PieceKind::Rook, Color::White).moved();
        assert!(rook.has_moved);
        assert!(rook.moved().has_moved);
    }
}
