use super::super::{Color, Move, MoveKind, MoveList, PieceKind, Position, Square};
use super::GenMode;

impl Position {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        let dir = color.pawn_direction();
        let promotion_rank = color.promotion_rank();

        // Forward pushes never attack anything.
        if mode == GenMode::Candidate {
            if let Some(forward_sq) = from.offset(dir, 0).filter(|sq| self.board.is_empty(*sq)) {
                if forward_sq.rank() == promotion_rank {
                    moves.push(Move::new(
                        from,
                        forward_sq,
                        MoveKind::Promotion { capture: false },
                    ));
                } else {
                    moves.push(Move::new(from, forward_sq, MoveKind::Quiet));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(double_sq) =
                            from.offset(2 * dir, 0).filter(|sq| self.board.is_empty(*sq))
                        {
                            moves.push(Move::new(from, double_sq, MoveKind::DoublePawnPush));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(dir, df) else {
                continue;
            };
            match self.board.color_on(target_sq) {
                Some(target_color) if target_color != color => {
                    let kind = if target_sq.rank() == promotion_rank {
                        MoveKind::Promotion { capture: true }
                    } else {
                        MoveKind::Capture
                    };
                    moves.push(Move::new(from, target_sq, kind));
                }
                Some(_) => {}
                None if self.is_en_passant_landing(color, target_sq) => {
                    moves.push(Move::new(from, target_sq, MoveKind::EnPassantCapture));
                }
                // An empty diagonal is still guarded by the pawn.
                None if mode == GenMode::Attack => {
                    moves.push(Move::new(from, target_sq, MoveKind::Capture));
                }
                None => {}
            }
        }
    }

    /// True if a pawn of `color` landing on `sq` would capture the pawn that
    /// just made a double push.
    fn is_en_passant_landing(&self, color: Color, sq: Square) -> bool {
        let Some(target) = self.en_passant else {
            return false;
        };
        target.direction == color.opponent().pawn_direction()
            && target.capture_square() == sq
            && self.board.piece_at(target.square).is_some_and(|victim| {
                victim.kind == PieceKind::Pawn && victim.color == color.opponent()
            })
    }
}
