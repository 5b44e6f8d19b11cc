use super::movegen::castle_rook_squares;
use super::{EnPassantTarget, Move, MoveKind, Piece, PieceKind, Position, Square};

impl Position {
    /// Apply `mv` to the board and en passant state. The side to move is left
    /// alone, so the result can be probed for the mover's own king safety.
    ///
    /// Returns the captured piece, including a pawn taken en passant.
    /// `mv` is trusted to come from this position's generator.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let mut captured = self.board.take(mv.to);

        if mv.kind == MoveKind::EnPassantCapture {
            captured = self.board.take(Square(mv.from.rank(), mv.to.file()));
        }

        if let Some(piece) = self.board.take(mv.from) {
            let mut moved = piece.moved();
            if moved.kind == PieceKind::Pawn && mv.to.rank() == moved.color.promotion_rank() {
                moved.kind = PieceKind::Queen;
            }
            self.board.set(mv.to, moved);

            if mv.kind == MoveKind::DoublePawnPush {
                self.en_passant = Some(EnPassantTarget {
                    square: mv.to,
                    direction: piece.color.pawn_direction(),
                });
            } else {
                self.en_passant = None;
            }
        }

        if let Some((rook_from, rook_to)) = castle_rook_squares(mv.kind, mv.from.rank()) {
            if let Some(rook) = self.board.take(rook_from) {
                self.board.set(rook_to, rook.moved());
            }
        }

        captured
    }

    /// The position after `mv`, leaving `self` untouched. Turn is not toggled.
    #[must_use]
    pub fn after(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    /// Apply `mv` and hand the turn to the opponent.
    pub fn play(&mut self, mv: Move) -> Option<Piece> {
        let captured = self.apply(mv);
        self.side_to_move = self.side_to_move.opponent();
        captured
    }
}
