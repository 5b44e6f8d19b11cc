use super::super::{Color, Move, MoveKind, MoveList, Position, Square};

impl Position {
    /// Walk each ray in `directions`. A ray ends before a friendly piece and
    /// on an enemy one.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.board.color_on(next) {
                    None => moves.push(Move::new(from, next, MoveKind::Quiet)),
                    Some(other) => {
                        if other != color {
                            moves.push(Move::new(from, next, MoveKind::Capture));
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }
}
