use super::{Move, MoveKind, Position};

impl Position {
    /// Short notation for `mv`, read from this position before the move is applied.
    ///
    /// Piece letter (none for pawns), `x` on captures, the destination square,
    /// and `=Q` on promotion. Castling is `O-O` or `O-O-O`. No check marks.
    #[must_use]
    pub fn notation(&self, mv: Move) -> String {
        let letter = self
            .board
            .piece_at(mv.from)
            .and_then(|piece| piece.kind.letter());

        let (capture, promotion) = match mv.kind {
            MoveKind::CastleKingside => return "O-O".to_string(),
            MoveKind::CastleQueenside => return "O-O-O".to_string(),
            MoveKind::Quiet | MoveKind::DoublePawnPush => (false, false),
            MoveKind::Capture | MoveKind::EnPassantCapture => (true, false),
            MoveKind::Promotion { capture } => (capture, true),
        };

        let mut text = String::with_capacity(6);
        if let Some(letter) = letter {
            text.push(letter);
        }
        if capture {
            text.push('x');
        }
        text.push_str(&mv.to.to_string());
        if promotion {
            text.push_str("=Q");
        }
        text
    }
}
