use super::movegen::GenMode;
use super::{Color, MoveList, PieceKind, Position, Square};

impl Position {
    /// True if any piece of `by` attacks `square`.
    ///
    /// Built on attack-mode generation, so it never consults castling.
    #[must_use]
    pub fn is_attacked(&self, by: Color, square: Square) -> bool {
        let mut moves = MoveList::new();
        for (from, _) in self.board.pieces_of(by) {
            moves.clear();
            self.generate_into(from, GenMode::Attack, &mut moves);
            if moves.iter().any(|mv| mv.to == square) {
                return true;
            }
        }
        false
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.board
            .pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// If that king is missing. Loaded positions always hold both kings and
    /// kings are never captured, so this only fires on a broken invariant.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(sq) => sq,
            None => panic!("{color} king missing from board"),
        }
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_attacked(color.opponent(), self.king_square(color))
    }
}
