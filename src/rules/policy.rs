//! Phase-specific rule switches.
//!
//! The move generator and the turn machine are shared by both phases; what
//! differs (board bounds, corner access, the opening edge-pawn guard, en
//! passant, the king/queen swap, what happens to a seat with no moves) is
//! answered by a `RulesPolicy`:
//! - `SurvivalRules` for the four-seat game on the full board
//! - `DuelRules` for standard chess inside the arena

use serde::{Deserialize, Serialize};

use crate::core::{in_home_corner, Bounds, Piece, Seat, Square};

use super::position::Position;

/// Game phase. Only ever advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GamePhase {
    /// Up to four seats on the 12x12 board.
    Survival,
    /// Momentary: two survivors are being moved into the arena.
    Transition,
    /// Standard chess between two seats.
    Duel,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Last seat standing, or the duel's checkmating side.
    Winner(Seat),
    /// Threefold repetition, duel stalemate, or nobody able to move.
    Draw,
}

impl GameOutcome {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameOutcome::Winner(s) if *s == seat)
    }
}

/// What happens to a living seat with no legal move that is not in check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StuckSeat {
    /// Rotation skips it.
    Pass,
    /// The game is drawn.
    Stalemate,
}

/// Rule switches for one phase.
///
/// Implementations are stateless; pick one with [`rules_for`].
pub trait RulesPolicy: Sync {
    /// The phase this policy governs.
    fn phase(&self) -> GamePhase;

    /// Region pieces may move within.
    fn bounds(&self) -> Bounds;

    /// Kings may step into their own home corner.
    fn corners_open(&self) -> bool;

    /// Edge pawns may not take enemy edge pawns early in the game.
    fn edge_pawn_guard(&self) -> bool;

    /// En passant captures exist.
    fn en_passant(&self) -> bool;

    /// The one-time king/queen swap may be offered.
    fn swap_allowed(&self) -> bool;

    /// Outcome for a stuck seat that is not in check.
    fn stuck_seat(&self) -> StuckSeat;

    // === Convenience Methods ===

    /// May `piece` finish a move on `sq` (ignoring occupancy)?
    fn may_land(&self, piece: Piece, sq: Square) -> bool {
        if !self.bounds().contains(sq) {
            return false;
        }
        if sq.is_corner() {
            return self.corners_open() && piece.is_king() && in_home_corner(sq, piece.owner);
        }
        true
    }

    /// May a slider pass through or stop on `sq` (ignoring occupancy)?
    fn ray_open(&self, sq: Square) -> bool {
        self.bounds().contains(sq) && !sq.is_corner()
    }
}

/// Four-seat rules on the full board.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurvivalRules;

impl RulesPolicy for SurvivalRules {
    fn phase(&self) -> GamePhase {
        GamePhase::Survival
    }

    fn bounds(&self) -> Bounds {
        Bounds::FULL
    }

    fn corners_open(&self) -> bool {
        true
    }

    fn edge_pawn_guard(&self) -> bool {
        true
    }

    fn en_passant(&self) -> bool {
        false
    }

    fn swap_allowed(&self) -> bool {
        true
    }

    fn stuck_seat(&self) -> StuckSeat {
        StuckSeat::Pass
    }
}

/// Standard chess inside the arena.
#[derive(Clone, Copy, Debug, Default)]
pub struct DuelRules;

impl RulesPolicy for DuelRules {
    fn phase(&self) -> GamePhase {
        GamePhase::Duel
    }

    fn bounds(&self) -> Bounds {
        Bounds::ARENA
    }

    fn corners_open(&self) -> bool {
        false
    }

    fn edge_pawn_guard(&self) -> bool {
        false
    }

    fn en_passant(&self) -> bool {
        true
    }

    fn swap_allowed(&self) -> bool {
        false
    }

    fn stuck_seat(&self) -> StuckSeat {
        StuckSeat::Stalemate
    }
}

/// The policy in force for a position.
#[must_use]
pub fn rules_for(position: &Position) -> &'static dyn RulesPolicy {
    if position.duel {
        &DuelRules
    } else {
        &SurvivalRules
    }
}
