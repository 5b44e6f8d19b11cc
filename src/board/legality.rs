//! Legality filtering and game-status evaluation.
//!
//! Every candidate move is tried on a private copy of the position
//! ([`Position::after`]); the original is never mutated, so concurrent
//! probes from different squares cannot observe each other.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, MoveList, Position, Square};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing { check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Ongoing { check: false }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing { check: false } => write!(f, "ongoing"),
            GameStatus::Ongoing { check: true } => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Position {
    /// Legal moves of the piece on `from`: candidates that do not leave its
    /// own king attacked. Empty if `from` is empty.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        let mut legal = MoveList::new();
        let Some(piece) = self.board.piece_at(from) else {
            return legal;
        };
        for mv in &self.candidate_moves(from) {
            if self.keeps_king_safe(piece.color, *mv) {
                legal.push(*mv);
            }
        }
        legal
    }

    /// Legal moves for every piece of `color`, a1 first.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> MoveList {
        let mut all = MoveList::new();
        for (from, _) in self.board.pieces_of(color) {
            all.extend_from(&self.legal_moves(from));
        }
        all
    }

    /// Whether `color` has at least one legal move; stops at the first.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board.pieces_of(color).any(|(from, _)| {
            self.candidate_moves(from)
                .iter()
                .any(|mv| self.keeps_king_safe(color, *mv))
        })
    }

    /// Status of the game from `color`'s point of view, as if `color` were to move.
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        let check = self.is_in_check(color);
        if self.has_legal_move(color) {
            GameStatus::Ongoing { check }
        } else if check {
            GameStatus::Checkmate {
                winner: color.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Count leaf nodes of the legal move tree to `depth` plies, starting
    /// with the side to move.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(self.side_to_move);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            let mut next = self.clone();
            next.play(*mv);
            nodes += next.perft(depth - 1);
        }
        nodes
    }

    fn keeps_king_safe(&self, mover: Color, mv: Move) -> bool {
        let next = self.after(mv);
        !next.is_attacked(mover.opponent(), next.king_square(mover))
    }
}
