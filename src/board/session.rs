//! A single local game: position, capture bins, notation log and undo history.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameSession, GameStatus, Square};
//!
//! let mut game = GameSession::new();
//! let record = game.request_move(Square(1, 4), Square(3, 4)).unwrap();
//! assert_eq!(record.notation, "e4");
//! assert_eq!(game.status(), GameStatus::Ongoing { check: false });
//! assert!(game.undo());
//! assert_eq!(game, GameSession::new());
//! ```

use super::error::{MoveRejected, PlacementError};
use super::history::History;
use super::{
    Board, CaptureBins, Color, GameStatus, Move, MoveList, Piece, Position, Snapshot, Square,
};

/// Outcome of a committed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// The moving piece as it stood before the move
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
    /// Status for the side now to move
    pub status: GameStatus,
}

/// Owns all mutable state of one game. Start a new game by replacing it or
/// calling [`GameSession::new_game`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    position: Position,
    captures: CaptureBins,
    notation: Vec<String>,
    status: GameStatus,
    history: History,
}

impl GameSession {
    /// A game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// A game from a placement string; White moves first.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let position = Position::try_from_placement(placement)?;
        debug_log!("new game from placement {}", position.to_placement());
        Ok(Self::from_position(position))
    }

    /// A game from an arbitrary position, keeping its side to move.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let status = position.status(position.side_to_move);
        GameSession {
            position,
            captures: CaptureBins::default(),
            notation: Vec::new(),
            status,
            history: History::default(),
        }
    }

    /// Discard this game and start over from `placement`.
    ///
    /// On error the current game is left as it was.
    pub fn new_game(&mut self, placement: &str) -> Result<(), PlacementError> {
        *self = Self::from_placement(placement)?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Status for the side to move. Recomputed after every commit and undo.
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn captures(&self) -> &CaptureBins {
        &self.captures
    }

    /// Notation of every committed move, oldest first.
    #[must_use]
    pub fn notation(&self) -> &[String] {
        &self.notation
    }

    /// Number of moves that can be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Copy of the current state, in the same form undo restores.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position.clone(),
            captures: self.captures.clone(),
            notation: self.notation.clone(),
        }
    }

    /// Legal moves for the piece on `square`. Empty unless it belongs to the
    /// side to move and the game is still running.
    #[must_use]
    pub fn select(&self, square: Square) -> MoveList {
        let selectable = !self.status.is_terminal()
            && self.position.board.color_on(square) == Some(self.side_to_move());
        if selectable {
            self.position.legal_moves(square)
        } else {
            MoveList::new()
        }
    }

    /// Every legal move for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        self.position.all_legal_moves(self.side_to_move())
    }

    /// Resolve a (from, to) request against the legal moves of `from` and
    /// commit it. Nothing changes when the request is rejected.
    pub fn request_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveRejected> {
        if self.status.is_terminal() {
            debug_log!("rejected {from}{to}: game over ({})", self.status);
            return Err(MoveRejected::GameOver {
                status: self.status,
            });
        }
        match self.select(from).find(to) {
            Some(mv) => Ok(self.commit(mv)),
            None => {
                debug_log!("rejected {from}{to}: not legal");
                Err(MoveRejected::NotLegal { from, to })
            }
        }
    }

    /// Commit `mv`, which must be a legal move for the side to move (as
    /// returned by [`GameSession::select`]). Use [`GameSession::request_move`]
    /// for unchecked input.
    ///
    /// # Panics
    /// If `mv.from` is empty.
    pub fn commit(&mut self, mv: Move) -> MoveRecord {
        let Some(piece) = self.position.piece_at(mv.from) else {
            panic!("commit of {mv} from an empty square");
        };
        let mover = self.side_to_move();

        self.history.push(self.snapshot());
        let notation = self.position.notation(mv);
        let captured = self.position.play(mv);
        if let Some(victim) = captured {
            self.captures.record(mover, victim);
        }
        self.notation.push(notation.clone());
        self.status = self.position.status(self.side_to_move());

        debug_log!("{mover} played {notation} ({})", self.status);
        if self.status.is_terminal() {
            debug_log!("game over: {}", self.status);
        }

        MoveRecord {
            mv,
            piece,
            captured,
            notation,
            status: self.status,
        }
    }

    /// Restore the state from before the last committed move.
    /// Returns false, changing nothing, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            trace_log!("undo with empty history");
            return false;
        };
        self.position = snapshot.position;
        self.captures = snapshot.captures;
        self.notation = snapshot.notation;
        self.status = self.position.status(self.side_to_move());
        debug_log!("undo, {} moves left in history", self.history.len());
        true
    }

    /// Drop all undo history, keeping the current state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
