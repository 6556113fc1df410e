//! Move representation and move-log records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::PieceKind;
use super::seat::Seat;
use super::square::Square;

/// What a move does beyond relocating one piece.
///
/// Generated moves carry their kind, so applying a move never needs to
/// consult the rules again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Plain move or capture (promotion is decided on application).
    Normal,
    /// Pawn advancing two squares from its start.
    DoublePush,
    /// Duel-only en passant capture; `captured` is the bypassing pawn's square.
    EnPassant { captured: Square },
    /// King jumps two squares; the rook moves to the square it crossed.
    Castle { rook_from: Square, rook_to: Square },
    /// One-time king/queen swap (queen on `from`, king on `to`).
    Swap,
}

/// A fully described move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveKind::Normal)
    }

    /// Coordinates as `(sr, sc, er, ec)`.
    #[must_use]
    pub const fn coords(&self) -> (u8, u8, u8, u8) {
        (self.from.row, self.from.col, self.to.row, self.to.col)
    }

    /// Same source and destination as the given coordinates.
    #[must_use]
    pub fn matches(&self, sr: u8, sc: u8, er: u8, ec: u8) -> bool {
        self.coords() == (sr, sc, er, ec)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Per-piece move buffer. Most pieces have well under 32 destinations.
pub type MoveList = SmallVec<[Move; 32]>;

/// A move as recorded in the game's move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that moved.
    pub by: Seat,
    pub from: Square,
    pub to: Square,
    /// Kind of the piece captured, if any.
    pub captured: Option<PieceKind>,
    /// A pawn promoted on this move.
    pub promoted: bool,
    /// This was the one-time king/queen swap.
    pub swap: bool,
    /// This was a castle or short king jump.
    pub castle: bool,
}
