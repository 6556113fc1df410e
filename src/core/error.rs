//! Error types.
//!
//! Move rejections are ordinary, recoverable outcomes: the caller may try a
//! different move and the position is untouched. Eliminations and draws are
//! not errors; they are reported through the game outcome.

use thiserror::Error;

use super::seat::Seat;

/// Why a move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game already has a winner or was drawn.
    #[error("Game is over")]
    GameOver,

    /// Another seat must move (rotation or forced check response).
    #[error("Not {seat}'s turn (active: {active})")]
    NotYourTurn { seat: Seat, active: Seat },

    /// Coordinates outside the board (or outside the arena during the duel).
    #[error("Move out of bounds")]
    OutOfBounds,

    /// Destination is a corner square the piece may not enter.
    #[error("Corner squares are off limits")]
    CornerSquare,

    /// No piece on the source square.
    #[error("No piece on the source square")]
    NoPiece,

    /// The source piece belongs to another seat.
    #[error("Piece does not belong to {seat}")]
    NotOwnPiece { seat: Seat },

    /// The destination is not in the piece's legal move set.
    #[error("Illegal move")]
    Illegal,
}

/// Engine-level errors outside move validation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A seat name that matches none of the four seats.
    #[error("Unknown seat '{0}'")]
    UnknownSeat(String),

    /// History export or import failed.
    #[error("History encoding failed: {0}")]
    History(#[from] bincode::Error),
}
