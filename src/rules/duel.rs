//! Survival-to-duel transition.
//!
//! When exactly two seats are left, their material outside the arena is
//! purged, the survivors are mapped onto White and Black, and the arena is
//! reseeded with the standard chess position. Standard chess rules apply
//! from then on.

use serde::{Deserialize, Serialize};

use crate::core::{layout, Seat, SeatMap, Square};

use super::position::{default_pawn_dir, Position};
use super::sanctuary::SanctuaryState;

/// Which four-seat identities now play White and Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DuelOrigins {
    pub white: Seat,
    pub black: Seat,
}

impl DuelOrigins {
    /// Duel seat played by a four-seat identity, if it survived.
    #[must_use]
    pub fn duel_seat_of(&self, origin: Seat) -> Option<Seat> {
        if origin == self.white {
            Some(Seat::White)
        } else if origin == self.black {
            Some(Seat::Black)
        } else {
            None
        }
    }
}

/// Map two survivors (any order) onto White and Black.
///
/// A survivor already seated as White or Black keeps that seat; otherwise
/// the earlier survivor in turn order takes White.
#[must_use]
pub fn map_survivors(a: Seat, b: Seat) -> DuelOrigins {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    if first == Seat::White || second == Seat::White {
        let other = if first == Seat::White { second } else { first };
        DuelOrigins {
            white: Seat::White,
            black: other,
        }
    } else if first == Seat::Black || second == Seat::Black {
        let other = if first == Seat::Black { second } else { first };
        DuelOrigins {
            white: other,
            black: Seat::Black,
        }
    } else {
        DuelOrigins {
            white: first,
            black: second,
        }
    }
}

/// Remove every non-king piece outside the arena. Returns how many went.
pub fn purge_outside_arena(position: &mut Position) -> usize {
    let doomed: Vec<Square> = position
        .board
        .pieces()
        .filter(|(sq, p)| !sq.in_arena() && !p.is_king())
        .map(|(sq, _)| sq)
        .collect();
    for sq in &doomed {
        position.board.take(*sq);
    }
    doomed.len()
}

/// Run the transition if exactly two seats are alive. Returns the seat
/// mapping, or `None` when the position does not qualify or is already a
/// duel.
pub fn enter_duel(position: &mut Position) -> Option<DuelOrigins> {
    if position.duel {
        return None;
    }
    let alive = position.board.alive_seats();
    let [a, b] = alive.as_slice() else {
        return None;
    };
    let origins = map_survivors(*a, *b);

    let purged = purge_outside_arena(position);
    log::debug!("purged {purged} pieces outside the arena");

    position.board = layout::duel_start();
    position.duel = true;
    position.sanctuary = SeatMap::with_value(SanctuaryState::default());
    position.swap_available = SeatMap::with_value(false);
    position.pawn_dir = SeatMap::new(default_pawn_dir);
    position.half_moves = 0;
    position.en_passant = None;

    log::info!(
        "duel begins: {} plays White, {} plays Black",
        origins.white,
        origins.black
    );
    Some(origins)
}
