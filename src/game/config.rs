//! Game configuration.
//!
//! Collaborators build an `EngineConfig` (or load one from their settings
//! JSON) and hand it to `GameContext::new`. Nothing in the engine reads
//! process-wide flags; every toggle lives here.

use serde::{Deserialize, Serialize};

use crate::search::SearchConfig;

/// Game-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the AI's tie-breaking RNG.
    pub seed: u64,

    /// Captured-material points at which a seat is auto-eliminated during
    /// the four-seat phase. `0` disables the rule.
    pub auto_elim_threshold: u32,

    /// Enter the duel automatically when exactly two seats remain.
    /// `force_duel_now` works regardless.
    pub duel_on_two: bool,

    /// Offer each seat its one-time king/queen swap.
    pub king_queen_swap: bool,

    /// AI settings.
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            auto_elim_threshold: 0,
            duel_on_two: true,
            king_queen_swap: true,
            search: SearchConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable material-threshold auto-elimination.
    #[must_use]
    pub fn with_auto_elim_threshold(mut self, points: u32) -> Self {
        self.auto_elim_threshold = points;
        self
    }

    /// Toggle the automatic duel transition.
    #[must_use]
    pub fn with_duel_on_two(mut self, enabled: bool) -> Self {
        self.duel_on_two = enabled;
        self
    }

    /// Toggle the king/queen swap option.
    #[must_use]
    pub fn with_king_queen_swap(mut self, enabled: bool) -> Self {
        self.king_queen_swap = enabled;
        self
    }

    /// Replace the search settings.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchPolicy;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.auto_elim_threshold, 0);
        assert!(config.duel_on_two);
        assert!(config.king_queen_swap);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(9)
            .with_auto_elim_threshold(20)
            .with_duel_on_two(false)
            .with_search(SearchConfig::default().with_policy(SearchPolicy::Greedy));

        assert_eq!(config.seed, 9);
        assert_eq!(config.auto_elim_threshold, 20);
        assert!(!config.duel_on_two);
        assert_eq!(config.search.policy, SearchPolicy::Greedy);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_auto_elim_threshold(15);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
