use super::super::attack_tables::KING_TARGETS;
use super::super::{Move, MoveKind, MoveList, Piece, PieceKind, Position, Square};
use super::GenMode;

const KING_HOME_FILE: usize = 4;

/// Files involved in one castling side.
struct CastleSide {
    kind: MoveKind,
    rook_file: usize,
    /// Squares that must be empty, strictly between king and rook
    between: &'static [usize],
    /// Squares the king crosses and lands on (its start square is checked separately)
    transit: &'static [usize],
    king_to: usize,
}

const KINGSIDE: CastleSide = CastleSide {
    kind: MoveKind::CastleKingside,
    rook_file: 7,
    between: &[5, 6],
    transit: &[5, 6],
    king_to: 6,
};

const QUEENSIDE: CastleSide = CastleSide {
    kind: MoveKind::CastleQueenside,
    rook_file: 0,
    between: &[1, 2, 3],
    transit: &[3, 2],
    king_to: 2,
};

/// Rook (from, to) for a castling move whose king lands on `rank`.
pub(crate) fn castle_rook_squares(kind: MoveKind, rank: usize) -> Option<(Square, Square)> {
    match kind {
        MoveKind::CastleKingside => Some((Square(rank, 7), Square(rank, 5))),
        MoveKind::CastleQueenside => Some((Square(rank, 0), Square(rank, 3))),
        _ => None,
    }
}

impl Position {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        king: Piece,
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        for &to_sq in &KING_TARGETS[from.as_index()] {
            if let Some(mv) = self.step_move(from, to_sq, king.color) {
                moves.push(mv);
            }
        }

        // Castling is never an attack; skipping it here keeps attack detection
        // from re-entering castling generation.
        if mode == GenMode::Candidate {
            self.generate_castling(from, king, moves);
        }
    }

    fn generate_castling(&self, from: Square, king: Piece, moves: &mut MoveList) {
        let rank = king.color.back_rank();
        if king.has_moved || from != Square(rank, KING_HOME_FILE) {
            return;
        }
        let enemy = king.color.opponent();
        if self.is_attacked(enemy, from) {
            return;
        }

        for side in [&KINGSIDE, &QUEENSIDE] {
            let rook_ready = self
                .board
                .piece_at(Square(rank, side.rook_file))
                .is_some_and(|rook| {
                    rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
                });
            if !rook_ready {
                continue;
            }
            if side
                .between
                .iter()
                .any(|&file| !self.board.is_empty(Square(rank, file)))
            {
                continue;
            }
            if side
                .transit
                .iter()
                .any(|&file| self.is_attacked(enemy, Square(rank, file)))
            {
                continue;
            }
            moves.push(Move::new(from, Square(rank, side.king_to), side.kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PositionBuilder;

    fn castles(pos: &Position, from: Square) -> Vec<MoveKind> {
        pos.candidate_moves(from)
            .iter()
            .filter(|m| m.is_castling())
            .map(|m| m.kind)
            .collect()
    }

    fn position(placement: &str) -> Position {
        Position::try_from_placement(placement).unwrap()
    }

    #[test]
    fn test_both_sides_available() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R");
        assert_eq!(
            castles(&pos, Square(0, 4)),
            vec![MoveKind::CastleKingside, MoveKind::CastleQueenside]
        );
        assert_eq!(castles(&pos, Square(7, 4)).len(), 2);
    }

    #[test]
    fn test_never_in_attack_mode() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R");
        assert!(pos.attacking_moves(Square(0, 4)).iter().all(|m| !m.is_castling()));
    }

    #[test]
    fn test_blocked_between_squares() {
        // knight b1 blocks queenside even though the king never crosses b1
        let pos = position("4k3/8/8/8/8/8/8/RN2K1NR");
        assert!(castles(&pos, Square(0, 4)).is_empty());
        let pos = position("4k3/8/8/8/8/8/8/RN2K2R");
        assert_eq!(castles(&pos, Square(0, 4)), vec![MoveKind::CastleKingside]);
    }

    #[test]
    fn test_b_file_attack_does_not_stop_queenside() {
        // black rook on b8 attacks b1, which the king never crosses
        let pos = position("1r2k3/8/8/8/8/8/8/R3K3");
        assert_eq!(castles(&pos, Square(0, 4)), vec![MoveKind::CastleQueenside]);
    }

    #[test]
    fn test_not_out_of_check() {
        let pos = position("4k3/4r3/8/8/8/8/8/R3K2R");
        assert!(castles(&pos, Square(0, 4)).is_empty());
    }

    #[test]
    fn test_not_through_or_into_attack() {
        // f1 attacked by rook f8
        let pos = position("4kr2/8/8/8/8/8/8/4K2R");
        assert!(castles(&pos, Square(0, 4)).is_empty());
        // g1 attacked by rook g8
        let pos = position("4k1r1/8/8/8/8/8/8/4K2R");
        assert!(castles(&pos, Square(0, 4)).is_empty());
        // d1 attacked by bishop g4
        let pos = position("4k3/8/8/8/6b1/8/8/R3K3");
        assert!(castles(&pos, Square(0, 4)).is_empty());
    }

    #[test]
    fn test_pawn_guarded_transit_square() {
        // black pawn g2 guards f1 (and h1); the king may not cross f1
        let pos = position("4k3/8/8/8/8/8/6p1/4K2R");
        assert!(castles(&pos, Square(0, 4)).is_empty());
    }

    #[test]
    fn test_moved_king_or_rook() {
        let pos = PositionBuilder::from_placement("r3k2r/8/8/8/8/8/8/R3K2R")
            .unwrap()
            .moved(Square(0, 7))
            .moved(Square(7, 4))
            .build();
        assert_eq!(castles(&pos, Square(0, 4)), vec![MoveKind::CastleQueenside]);
        assert!(castles(&pos, Square(7, 4)).is_empty());
    }

    #[test]
    fn test_needs_home_square_and_own_rook() {
        let pos = position("4k3/8/8/8/8/8/8/R2K3R");
        assert!(castles(&pos, Square(0, 3)).is_empty());
        let pos = position("4k3/8/8/8/8/8/8/r3K2r");
        assert!(castles(&pos, Square(0, 4)).is_empty());
    }

    #[test]
    fn test_rook_squares() {
        assert_eq!(
            castle_rook_squares(MoveKind::CastleKingside, 0),
            Some((Square(0, 7), Square(0, 5)))
        );
        assert_eq!(
            castle_rook_squares(MoveKind::CastleQueenside, 7),
            Some((Square(7, 0), Square(7, 3)))
        );
        assert_eq!(castle_rook_squares(MoveKind::Quiet, 0), None);
    }
}
