//! Corner sanctuary: guardian promotion, check immunity, forced eviction.
//!
//! State is recomputed after every applied or simulated move by
//! [`refresh`]; the previous state travels in the move's undo record, so a
//! simulated corner entry (including its guardian promotion) is reverted
//! exactly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{in_home_corner, Board, PieceKind, Seat, SeatMap, Square};

use super::position::Position;

/// Queens needed (with the king in its corner) for check immunity.
pub const IMMUNITY_QUEENS: usize = 3;

/// Queen count at or below which a promoted seat's king is evicted.
pub const EVICTION_QUEENS: usize = 1;

/// Per-seat sanctuary flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SanctuaryState {
    /// King stands in its own home corner.
    pub in_corner: bool,
    /// Guardian promotion already happened (once per game).
    pub promoted: bool,
    /// King cannot be reported in check.
    pub immune: bool,
    /// King must leave the corner if it can.
    pub eviction_pending: bool,
}

/// Squares whose bishop was promoted by a refresh.
pub type GuardianSquares = SmallVec<[Square; 4]>;

/// Recompute every seat's sanctuary flags, applying first-entry guardian
/// promotion. Returns the squares that were promoted.
pub fn refresh(board: &mut Board, sanctuary: &mut SeatMap<SanctuaryState>) -> GuardianSquares {
    let mut promoted = GuardianSquares::new();

    for seat in Seat::all() {
        let state = &mut sanctuary[seat];
        let Some(king) = board.find_king(seat) else {
            state.in_corner = false;
            state.immune = false;
            state.eviction_pending = false;
            continue;
        };

        state.in_corner = in_home_corner(king, seat);

        if state.in_corner && !state.promoted {
            let bishops: GuardianSquares = board
                .squares_of(seat)
                .filter(|sq| matches!(board.get(*sq), Some(p) if p.kind == PieceKind::Bishop))
                .collect();
            for sq in bishops {
                if let Some(piece) = board.get_mut(sq) {
                    piece.kind = PieceKind::Queen;
                    promoted.push(sq);
                }
            }
            state.promoted = true;
            log::debug!("{seat} king entered its corner; guardian promotion applied");
        }

        let queens = board.count(seat, PieceKind::Queen);
        state.immune = state.in_corner && queens >= IMMUNITY_QUEENS;
        state.eviction_pending = state.in_corner && state.promoted && queens <= EVICTION_QUEENS;
    }

    promoted
}

/// Is the seat currently immune to check?
#[must_use]
pub fn is_immune(position: &Position, seat: Seat) -> bool {
    !position.duel && position.sanctuary[seat].immune
}

/// Narrow an evicted king's moves to those leaving the corner, when any
/// exist. Moves of other pieces are untouched.
pub fn apply_eviction<M: Copy>(
    position: &Position,
    seat: Seat,
    moves: &mut Vec<M>,
    endpoints: impl Fn(&M) -> (Square, Square),
) {
    if position.duel || !position.sanctuary[seat].eviction_pending {
        return;
    }
    let Some(king) = position.board.find_king(seat) else {
        return;
    };

    let king_move = |m: &M| endpoints(m).0 == king;
    let exits_corner = |m: &M| !in_home_corner(endpoints(m).1, seat);

    let has_exit = moves.iter().any(|m| king_move(m) && exits_corner(m));
    if has_exit {
        moves.retain(|m| !king_move(m) || exits_corner(m));
    }
}
