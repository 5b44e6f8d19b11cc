//! Pseudo-legal move generation.
//!
//! Two entry points share the per-piece generators:
//! - [`Position::candidate_moves`] yields every pseudo-legal move, castling
//!   included. It is the input to the legality filter.
//! - [`Position::attacking_moves`] yields only the squares a piece attacks.
//!   It never generates castling or forward pawn pushes, so attack detection
//!   can run from inside castling generation without recursing.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castle_rook_squares;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Color, Move, MoveKind, MoveList, PieceKind, Position, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenMode {
    Attack,
    Candidate,
}

impl Position {
    /// Squares the piece on `from` attacks, as moves. Empty if `from` is empty.
    #[must_use]
    pub fn attacking_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_into(from, GenMode::Attack, &mut moves);
        moves
    }

    /// Pseudo-legal moves of the piece on `from`, ignoring self-check.
    /// Empty if `from` is empty.
    #[must_use]
    pub fn candidate_moves(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_into(from, GenMode::Candidate, &mut moves);
        moves
    }

    pub(crate) fn generate_into(&self, from: Square, mode: GenMode, moves: &mut MoveList) {
        let Some(piece) = self.board.piece_at(from) else {
            return;
        };
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color, mode, moves),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color, moves),
            PieceKind::Bishop => {
                self.generate_slider_moves(from, piece.color, &BISHOP_DIRECTIONS, moves);
            }
            PieceKind::Rook => {
                self.generate_slider_moves(from, piece.color, &ROOK_DIRECTIONS, moves);
            }
            PieceKind::Queen => {
                self.generate_slider_moves(from, piece.color, &QUEEN_DIRECTIONS, moves);
            }
            PieceKind::King => self.generate_king_moves(from, piece, mode, moves),
        }
    }

    /// Quiet or capture, depending on who stands on `to`.
    /// Returns `None` when `to` holds a piece of `color`.
    fn step_move(&self, from: Square, to: Square, color: Color) -> Option<Move> {
        match self.board.color_on(to) {
            None => Some(Move::new(from, to, MoveKind::Quiet)),
            Some(other) if other != color => Some(Move::new(from, to, MoveKind::Capture)),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(placement: &str) -> Position {
        Position::try_from_placement(placement).unwrap()
    }

    #[test]
    fn test_empty_square_generates_nothing() {
        let pos = Position::new();
        assert!(pos.candidate_moves(Square(3, 3)).is_empty());
        assert!(pos.attacking_moves(Square(3, 3)).is_empty());
    }

    #[test]
    fn test_start_position_candidates() {
        let pos = Position::new();
        let total: usize = pos
            .board()
            .pieces_of(Color::White)
            .map(|(sq, _)| pos.candidate_moves(sq).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_knight_skips_friendly_squares() {
        let pos = Position::new();
        let moves = pos.candidate_moves(Square(0, 6));
        assert_eq!(moves.destinations(), vec![Square(2, 7), Square(2, 5)]);
        assert!(moves.iter().all(|m| m.kind == MoveKind::Quiet));
    }

    #[test]
    fn test_slider_stops_at_blockers() {
        // Rook d4, friendly pawn d6, enemy pawn f4
        let pos = position("4k3/8/3P4/8/3R1p2/8/8/4K3");
        let moves = pos.candidate_moves(Square(3, 3));
        let dests = moves.destinations();
        assert!(dests.contains(&Square(4, 3)));
        assert!(!dests.contains(&Square(5, 3)), "friendly blocker excluded");
        assert!(!dests.contains(&Square(6, 3)), "ray stops at blocker");
        assert_eq!(moves.find(Square(3, 5)).map(|m| m.kind), Some(MoveKind::Capture));
        assert!(!dests.contains(&Square(3, 6)), "ray stops after capture");
        // d1..d3 down, d5 up, a4..c4 left, e4 + f4 right
        assert_eq!(moves.len(), 3 + 1 + 3 + 2);
    }

    #[test]
    fn test_each_slider_uses_its_own_rays() {
        let bishop = position("4k3/8/8/8/3B4/8/8/4K3");
        let moves = bishop.candidate_moves(Square(3, 3));
        assert_eq!(moves.len(), 13);
        assert!(moves.iter().all(|m| m.from.rank() != m.to.rank()));
        assert!(moves.iter().all(|m| m.from.file() != m.to.file()));

        let rook = position("4k3/8/8/8/3R4/8/8/4K3");
        let moves = rook.candidate_moves(Square(3, 3));
        assert_eq!(moves.len(), 14);
        assert!(moves
            .iter()
            .all(|m| m.from.rank() == m.to.rank() || m.from.file() == m.to.file()));
    }

    #[test]
    fn test_queen_combines_directions() {
        let pos = position("4k3/8/8/8/3Q4/8/8/4K3");
        assert_eq!(pos.candidate_moves(Square(3, 3)).len(), 27);
        assert_eq!(pos.attacking_moves(Square(3, 3)).len(), 27);
    }
}
