//! Synchronization primitives for sharing a game between threads.
//!
//! All mutation goes through one lock. Legality probing never needs it for
//! longer than a clone, since simulation runs on private `Position` copies.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{
    GameSession, GameStatus, MoveList, MoveRecord, MoveRejected, PlacementError, Position,
    Snapshot, Square,
};

/// A thread-safe handle to one [`GameSession`].
///
/// This wraps `Arc<Mutex<GameSession>>`; clones share the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedSession(Arc<Mutex<GameSession>>);

impl SharedSession {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        SharedSession(Arc::new(Mutex::new(session)))
    }

    /// Request a move under the lock.
    pub fn request_move(&self, from: Square, to: Square) -> Result<MoveRecord, MoveRejected> {
        self.0.lock().request_move(from, to)
    }

    /// Undo the last move. False when there is nothing to undo.
    pub fn undo(&self) -> bool {
        self.0.lock().undo()
    }

    /// Replace the game with a new one from `placement`.
    pub fn new_game(&self, placement: &str) -> Result<(), PlacementError> {
        // Parse outside the lock; only the swap needs it.
        let fresh = GameSession::from_placement(placement)?;
        *self.0.lock() = fresh;
        Ok(())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.0.lock().status()
    }

    /// Legal moves from `square` for the side to move, computed on a copy
    /// taken under the lock.
    #[must_use]
    pub fn select(&self, square: Square) -> MoveList {
        let (position, playable) = {
            let session = self.0.lock();
            let playable = !session.status().is_terminal()
                && session.board().color_on(square) == Some(session.side_to_move());
            (session.position().clone(), playable)
        };
        if playable {
            position.legal_moves(square)
        } else {
            MoveList::new()
        }
    }

    /// Every legal move for the side to move, computed on a copy.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let (position, running) = {
            let session = self.0.lock();
            (session.position().clone(), !session.status().is_terminal())
        };
        if running {
            position.all_legal_moves(position.side_to_move())
        } else {
            MoveList::new()
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.0.lock().position().clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.0.lock().snapshot()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut *self.0.lock())
    }
}

impl From<GameSession> for SharedSession {
    fn from(session: GameSession) -> Self {
        SharedSession::new(session)
    }
}
