#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Position};

/// Pieces captured so far, in capture order, per capturing side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaptureBins {
    pub by_white: Vec<Piece>,
    pub by_black: Vec<Piece>,
}

impl CaptureBins {
    pub(crate) fn record(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::White => self.by_white.push(piece),
            Color::Black => self.by_black.push(piece),
        }
    }

    #[must_use]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.by_white,
            Color::Black => &self.by_black,
        }
    }
}

/// Copy of a session's state taken just before a move is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub position: Position,
    pub captures: CaptureBins,
    pub notation: Vec<String>,
}

/// Stack of snapshots, most recent on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct History {
    stack: Vec<Snapshot>,
}

impl History {
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.stack.push(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }
}
