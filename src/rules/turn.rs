//! Turn rotation with forced check responses.
//!
//! Seats move clockwise. A move that puts other seats in check hands a
//! one-move override to the earliest of them clockwise from the mover;
//! once that seat answers, rotation resumes after it. Eliminated seats are
//! skipped everywhere.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

use super::legality::{has_legal_move, king_in_check};
use super::policy::{rules_for, StuckSeat};
use super::position::Position;

/// Rotation cursor plus the optional forced-response seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    /// Seat next in plain clockwise rotation.
    pub rotation: Seat,
    /// Seat that must answer a check before rotation continues.
    pub forced: Option<Seat>,
}

impl TurnState {
    /// Rotation starting at `first`, with no override.
    #[must_use]
    pub const fn new(first: Seat) -> Self {
        Self {
            rotation: first,
            forced: None,
        }
    }

    /// The seat whose move it is.
    #[must_use]
    pub fn active(&self) -> Seat {
        self.forced.unwrap_or(self.rotation)
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Seat::White)
    }
}

/// First living seat clockwise after `seat` (not `seat` itself unless it is
/// the only one left).
#[must_use]
pub fn next_living(position: &Position, seat: Seat) -> Seat {
    let alive = position.board.alive_set();
    (1..=Seat::COUNT)
        .map(|step| seat.clockwise(step))
        .find(|s| alive.contains(*s))
        .unwrap_or(seat)
}

/// Turn state after `mover` has moved.
///
/// The forced seat is the earliest other living seat clockwise from the
/// mover whose king is in check; rotation always resumes after the mover.
#[must_use]
pub fn next_to_move(position: &Position, mover: Seat) -> TurnState {
    TurnState {
        rotation: next_living(position, mover),
        forced: first_in_check(position, mover.clockwise(1)).filter(|s| *s != mover),
    }
}

/// Earliest living seat whose king is in check, clockwise from `start`
/// (inclusive).
#[must_use]
pub fn first_in_check(position: &Position, start: Seat) -> Option<Seat> {
    let alive = position.board.alive_set();
    (0..Seat::COUNT)
        .map(|step| start.clockwise(step))
        .find(|s| alive.contains(*s) && king_in_check(position, *s))
}

/// Result of settling whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// The active seat has at least one legal move.
    Ready(TurnState),
    /// The active seat is stuck and the rules call it a draw.
    Stalemate(Seat),
    /// Every living seat is stuck.
    NoMoves,
}

/// Skip seats that cannot move but are not in check.
///
/// In Survival a stuck seat passes; in the duel it is stalemate. A stuck
/// seat that is in check is checkmated and must be eliminated by the caller
/// before settling; it is reported as `Ready` so the caller notices.
pub fn settle(position: &mut Position, mut turn: TurnState) -> Settled {
    for _ in 0..Seat::COUNT {
        let seat = turn.active();
        if has_legal_move(position, seat) || king_in_check(position, seat) {
            return Settled::Ready(turn);
        }
        match rules_for(position).stuck_seat() {
            StuckSeat::Stalemate => return Settled::Stalemate(seat),
            StuckSeat::Pass => {
                log::debug!("{seat} has no legal move and passes");
                turn = TurnState {
                    rotation: next_living(position, seat),
                    forced: None,
                };
            }
        }
    }
    Settled::NoMoves
}
