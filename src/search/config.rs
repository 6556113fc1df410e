//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// Which move picker the AI uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchPolicy {
    /// One-ply static scoring with random tie-break.
    Greedy,
    /// Iterative-deepening negamax with alpha-beta.
    Deepening,
}

/// Handicap favouring one duel seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelAsymmetry {
    /// Duel seat (White or Black) that gets the advantage.
    pub favored: Seat,
    /// Extra plies for the favoured seat.
    pub extra_depth: u8,
    /// Favoured seat's thinking time relative to the other seat's, in
    /// percent. Both stay within the caller's budget: above 100 the other
    /// seat is scaled down, below 100 the favoured seat is.
    pub time_scale_pct: u32,
    /// Centipawns added to the favoured seat's evaluation.
    pub eval_bonus: i32,
}

impl DuelAsymmetry {
    /// Favour `seat` with no adjustments yet.
    #[must_use]
    pub fn favoring(seat: Seat) -> Self {
        Self {
            favored: seat,
            extra_depth: 0,
            time_scale_pct: 100,
            eval_bonus: 0,
        }
    }

    #[must_use]
    pub fn with_extra_depth(mut self, plies: u8) -> Self {
        self.extra_depth = plies;
        self
    }

    #[must_use]
    pub fn with_time_scale_pct(mut self, pct: u32) -> Self {
        self.time_scale_pct = pct;
        self
    }

    #[must_use]
    pub fn with_eval_bonus(mut self, centipawns: i32) -> Self {
        self.eval_bonus = centipawns;
        self
    }
}

/// AI configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Move picker.
    pub policy: SearchPolicy,

    /// Deepest iteration during the four-seat phase.
    pub max_depth: u8,

    /// Deepest iteration during the duel.
    pub duel_max_depth: u8,

    /// Greedy scoring yields the thread after this many moves (0 = never).
    pub yield_every: u32,

    /// Optional duel handicap.
    pub duel_asymmetry: Option<DuelAsymmetry>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            policy: SearchPolicy::Deepening,
            max_depth: 3,
            duel_max_depth: 5,
            yield_every: 64,
            duel_asymmetry: None,
        }
    }
}

impl SearchConfig {
    /// Set the move picker.
    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the four-seat depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the duel depth limit.
    #[must_use]
    pub fn with_duel_max_depth(mut self, depth: u8) -> Self {
        self.duel_max_depth = depth;
        self
    }

    /// Set the greedy yield interval.
    #[must_use]
    pub fn with_yield_every(mut self, moves: u32) -> Self {
        self.yield_every = moves;
        self
    }

    /// Enable a duel handicap.
    #[must_use]
    pub fn with_duel_asymmetry(mut self, asymmetry: DuelAsymmetry) -> Self {
        self.duel_asymmetry = Some(asymmetry);
        self
    }

    /// Depth limit for a search by `seat`, including any duel handicap.
    #[must_use]
    pub fn depth_for(&self, duel: bool, seat: Seat) -> u8 {
        if !duel {
            return self.max_depth.max(1);
        }
        let extra = match self.duel_asymmetry {
            Some(a) if a.favored == seat => a.extra_depth,
            _ => 0,
        };
        self.duel_max_depth.max(1).saturating_add(extra)
    }

    /// Time budget for a search by `seat`, including any duel handicap.
    /// Never exceeds `budget_ms`.
    #[must_use]
    pub fn budget_for(&self, duel: bool, seat: Seat, budget_ms: u64) -> u64 {
        let Some(a) = self.duel_asymmetry.filter(|_| duel) else {
            return budget_ms;
        };
        let pct = u64::from(a.time_scale_pct.max(1));
        match (a.favored == seat, pct >= 100) {
            (true, true) | (false, false) => budget_ms,
            (true, false) => budget_ms.saturating_mul(pct) / 100,
            (false, true) => budget_ms.saturating_mul(100) / pct,
        }
    }
}
