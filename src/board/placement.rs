use std::str::FromStr;

use super::error::{MoveParseError, PlacementError};
use super::{Board, Color, Piece, PieceKind, Position, Square};

/// Piece placement of the standard initial position.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse the piece-placement field of a position string.
    ///
    /// Ranks run from 8 down to 1, separated by `/`. Digits count empty
    /// squares, letters are pieces (uppercase White). Anything after the first
    /// whitespace (side to move, castling, en passant, clocks) is ignored.
    pub fn try_from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let field = placement.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = field.split('/').collect();

        if ranks.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(empty) = c.to_digit(10) {
                    if empty == 0 {
                        return Err(PlacementError::InvalidPiece { char: c });
                    }
                    file += empty as usize;
                    if file > 8 {
                        return Err(PlacementError::RankOverflow {
                            rank: rank_idx,
                            files: file,
                        });
                    }
                } else {
                    let piece = Piece::from_placement_char(c)
                        .ok_or(PlacementError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(PlacementError::RankOverflow {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set(Square(7 - rank_idx, file), piece);
                    file += 1;
                }
            }
            if file < 8 {
                return Err(PlacementError::IncompleteRank {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let found = board.count(PieceKind::King, color);
            if found != 1 {
                return Err(PlacementError::KingCount { color, found });
            }
        }

        Ok(board)
    }

    /// Write the piece-placement field for this board.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_placement_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl Position {
    /// Load a position from a placement string: White to move, no en passant window.
    pub fn try_from_placement(placement: &str) -> Result<Self, PlacementError> {
        Ok(Position::from_board(Board::try_from_placement(placement)?))
    }

    #[must_use]
    pub fn to_placement(&self) -> String {
        self.board.to_placement()
    }
}

impl FromStr for Position {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_placement(s)
    }
}

/// Parse a coordinate move request such as `e2e4` or `e2 e4` into (from, to).
///
/// A trailing `q` promotion suffix is accepted and ignored, since promotion
/// always yields a queen.
pub fn parse_move_request(text: &str) -> Result<(Square, Square), MoveParseError> {
    let compact: String = text.split_whitespace().collect();
    let coords = compact
        .strip_suffix(['q', 'Q'])
        .filter(|rest| rest.len() == 4)
        .unwrap_or(compact.as_str());

    if coords.len() != 4 || !coords.is_ascii() {
        return Err(MoveParseError::InvalidLength {
            len: coords.chars().count(),
        });
    }

    let invalid = || MoveParseError::InvalidSquare {
        notation: text.trim().to_string(),
    };
    let from: Square = coords[..2].parse().map_err(|_| invalid())?;
    let to: Square = coords[2..].parse().map_err(|_| invalid())?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_round_trip() {
        let board = Board::try_from_placement(STANDARD_PLACEMENT).unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(board.to_placement(), STANDARD_PLACEMENT);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let position = Position::try_from_placement(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .unwrap();
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.en_passant(), None);
        assert_eq!(
            position.piece_at(Square(3, 4)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn test_wrong_rank_count() {
        let result = Board::try_from_placement("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(result, Err(PlacementError::WrongRankCount { found: 7 }));
        let result = Board::try_from_placement("");
        assert_eq!(result, Err(PlacementError::WrongRankCount { found: 1 }));
    }

    #[test]
    fn test_invalid_piece_letter() {
        let result = Board::try_from_placement("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(result, Err(PlacementError::InvalidPiece { char: 'x' }));
        let result = Board::try_from_placement("rnbqkbnr/pppp0ppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(result, Err(PlacementError::InvalidPiece { char: '0' }));
    }

    #[test]
    fn test_rank_overflow() {
        let result = Board::try_from_placement("rnbqkbnrp/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(result, Err(PlacementError::RankOverflow { rank: 0, files: 9 }));
        let result = Board::try_from_placement("rnbqkbnr/pppppppp/81/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(result, Err(PlacementError::RankOverflow { rank: 2, files: 9 }));
        let result = Board::try_from_placement("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(result, Err(PlacementError::RankOverflow { rank: 2, files: 9 }));
    }

    #[test]
    fn test_incomplete_rank() {
        let result = Board::try_from_placement("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(result, Err(PlacementError::IncompleteRank { rank: 2, files: 7 }));
    }

    #[test]
    fn test_king_count_enforced() {
        let result = Board::try_from_placement("8/8/8/8/8/8/8/K7");
        assert_eq!(
            result,
            Err(PlacementError::KingCount {
                color: Color::Black,
                found: 0
            })
        );
        let result = Board::try_from_placement("k7/8/8/8/8/8/8/K6K");
        assert_eq!(
            result,
            Err(PlacementError::KingCount {
                color: Color::White,
                found: 2
            })
        );
    }

    #[test]
    fn test_from_str_trait() {
        let position: Position = "4k3/8/8/8/8/8/8/4K3".parse().unwrap();
        assert_eq!(position.board().pieces().count(), 2);
    }

    #[test]
    fn test_parse_move_request_forms() {
        let expected = Ok((Square(1, 4), Square(3, 4)));
        assert_eq!(parse_move_request("e2e4"), expected);
        assert_eq!(parse_move_request("e2 e4"), expected);
        assert_eq!(parse_move_request("  e2e4  "), expected);
        assert_eq!(
            parse_move_request("a7a8q"),
            Ok((Square(6, 0), Square(7, 0)))
        );
    }

    #[test]
    fn test_parse_move_request_errors() {
        assert_eq!(
            parse_move_request("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        );
        assert!(matches!(
            parse_move_request("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_move_request("e2e4e5"),
            Err(MoveParseError::InvalidLength { .. })
        ));
    }
}
