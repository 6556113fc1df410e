//! Serializable views of a game for collaborators.

use serde::{Deserialize, Serialize};

use crate::core::{Board, MoveRecord, Piece, Seat, SeatMap, Square};
use crate::rules::{DuelOrigins, GameOutcome, GamePhase, SanctuaryState};

/// Why a seat left the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EliminationReason {
    Checkmate,
    Resignation,
    Timeout,
    /// Lost material reached the configured threshold.
    AutoElimination,
    /// Removed by `force_duel_now`.
    DuelOverride,
}

/// One elimination, in the order they happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimination {
    pub seat: Seat,
    pub reason: EliminationReason,
}

/// A piece and where it stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub square: Square,
    pub piece: Piece,
}

/// Occupied squares in row-major order.
#[must_use]
pub fn placements(board: &Board) -> Vec<PlacedPiece> {
    board
        .pieces()
        .map(|(square, piece)| PlacedPiece { square, piece })
        .collect()
}

/// Full public state of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Seat to move, `None` once the game is over.
    pub turn: Option<Seat>,
    /// Seat that must answer a check before rotation continues.
    pub forced: Option<Seat>,
    pub phase: GamePhase,
    pub board: Vec<PlacedPiece>,
    pub alive: Vec<Seat>,
    pub in_check: Vec<Seat>,
    pub moves_log: Vec<MoveRecord>,
    pub outcome: Option<GameOutcome>,
    pub eliminated: Vec<Elimination>,
    /// Material each seat has lost to captures (queen 9 down to pawn 1).
    pub captured_points: SeatMap<u32>,
    pub swap_available: SeatMap<bool>,
    pub sanctuary: SeatMap<SanctuaryState>,
    /// Four-seat identities now playing White and Black.
    pub duel_origins: Option<DuelOrigins>,
    pub half_moves: u32,
}

impl StateSnapshot {
    /// The piece on `(row, col)`, if any.
    #[must_use]
    pub fn piece_at(&self, row: u8, col: u8) -> Option<Piece> {
        self.board
            .iter()
            .find(|p| p.square.row == row && p.square.col == col)
            .map(|p| p.piece)
    }
}
