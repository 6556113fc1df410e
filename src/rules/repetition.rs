//! Threefold repetition.
//!
//! Positions are keyed by an `FxHasher` digest of the piece placements, the
//! duel flag, the pawn-direction assignment and the half-move parity.
//! Counts live in a persistent map so snapshots and search copies clone in
//! O(1).

use std::hash::{Hash, Hasher};

use im::HashMap;
use rustc_hash::FxHasher;

use super::position::Position;

/// Occurrences at which a position is drawn.
pub const REPETITION_LIMIT: u8 = 3;

/// Canonical repetition key of a position.
#[must_use]
pub fn position_key(position: &Position) -> u64 {
    let mut hasher = FxHasher::default();
    for (sq, piece) in position.board.pieces() {
        sq.index().hash(&mut hasher);
        piece.kind.hash(&mut hasher);
        piece.owner.hash(&mut hasher);
    }
    position.duel.hash(&mut hasher);
    position.pawn_dir.hash(&mut hasher);
    (position.half_moves % 2).hash(&mut hasher);
    hasher.finish()
}

/// Occurrence counts per position key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionHistory {
    counts: HashMap<u64, u8>,
}

impl PositionHistory {
    /// Empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence of `position`, returning its new count.
    pub fn record(&mut self, position: &Position) -> u8 {
        let key = position_key(position);
        let count = self.counts.get(&key).copied().unwrap_or(0).saturating_add(1);
        self.counts.insert(key, count);
        count
    }

    /// How often `position` has occurred so far.
    #[must_use]
    pub fn count(&self, position: &Position) -> u8 {
        self.count_key(position_key(position))
    }

    /// How often the position with `key` has occurred so far.
    #[must_use]
    pub fn count_key(&self, key: u64) -> u8 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Would reaching `position` once more make it a third occurrence?
    #[must_use]
    pub fn would_repeat_thrice(&self, position: &Position) -> bool {
        self.count(position) + 1 >= REPETITION_LIMIT
    }

    /// Forget everything (used when the duel starts).
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Distinct positions seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
