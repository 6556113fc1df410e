//! Time-budgeted move search for any seat.
//!
//! ## Overview
//!
//! Two pickers share one interface:
//!
//! - **Greedy**: one ply, static scoring, random tie-break
//! - **Deepening**: iterative-deepening negamax with alpha-beta, paranoid
//!   in the four-seat game and plain two-player in the duel
//!
//! Both work on a private copy of the position, check a wall-clock deadline
//! as they go, and always return a legal move when one exists.
//!
//! ## Usage
//!
//! ```rust
//! use quad_duel::core::{GameRng, Seat};
//! use quad_duel::rules::{Position, PositionHistory};
//! use quad_duel::search::{SearchConfig, SearchPolicy, Searcher};
//!
//! let position = Position::opening();
//! let history = PositionHistory::new();
//! let mut rng = GameRng::new(7);
//!
//! let mut searcher = Searcher::new(SearchConfig::default().with_policy(SearchPolicy::Greedy));
//! let choice = searcher.choose(&position, Seat::White, &history, 50, &mut rng);
//! assert!(choice.is_some());
//! ```

pub mod config;
pub mod deadline;
pub mod deepening;
pub mod eval;
pub mod greedy;
pub mod ordering;
pub mod stats;

pub use config::{DuelAsymmetry, SearchConfig, SearchPolicy};
pub use deadline::{Deadline, SearchAborted};
pub use deepening::DeepeningPicker;
pub use greedy::GreedyPicker;
pub use stats::SearchStats;

use crate::core::{GameRng, Move, Seat};
use crate::rules::{Position, PositionHistory};

/// Everything a picker may look at.
#[derive(Clone, Copy, Debug)]
pub struct SearchRequest<'a> {
    pub position: &'a Position,
    pub seat: Seat,
    pub history: &'a PositionHistory,
    pub deadline: Deadline,
}

/// A move-choosing strategy.
///
/// Implementations must return a legal move for `request.seat` (or `None`
/// when it has none) and leave `request.position` untouched.
pub trait MovePicker: Send {
    fn pick(&mut self, request: &SearchRequest<'_>, rng: &mut GameRng, stats: &mut SearchStats) -> Option<Move>;
}

/// Owns the configured picker and the statistics of the last search.
pub struct Searcher {
    config: SearchConfig,
    picker: Box<dyn MovePicker>,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher using the picker named by `config.policy`.
    pub fn new(config: SearchConfig) -> Self {
        let picker: Box<dyn MovePicker> = match config.policy {
            SearchPolicy::Greedy => Box::new(GreedyPicker::new(config.yield_every, config.duel_asymmetry)),
            SearchPolicy::Deepening => Box::new(DeepeningPicker::new(config.clone())),
        };
        Self {
            config,
            picker,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom picker.
    pub fn with_picker<P: MovePicker + 'static>(mut self, picker: P) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a move for `seat` within `budget_ms` milliseconds.
    ///
    /// Tie-breaking draws from a stream forked off `rng`, so equal seeds and
    /// equal game histories give equal choices.
    pub fn choose(
        &mut self,
        position: &Position,
        seat: Seat,
        history: &PositionHistory,
        budget_ms: u64,
        rng: &mut GameRng,
    ) -> Option<Move> {
        self.stats.reset();
        let budget = self.config.budget_for(position.duel, seat, budget_ms);
        let request = SearchRequest {
            position,
            seat,
            history,
            deadline: Deadline::after_ms(budget),
        };

        let mut branch = rng.fork();
        let choice = self.picker.pick(&request, &mut branch, &mut self.stats);
        self.stats.time_us = request.deadline.elapsed().as_micros() as u64;

        log::debug!(
            "{seat} chose {} after {} nodes, depth {} in {} us",
            choice.map_or_else(|| "nothing".to_string(), |m| m.to_string()),
            self.stats.nodes,
            self.stats.completed_depth,
            self.stats.time_us
        );
        choice
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
