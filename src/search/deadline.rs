//! Wall-clock deadline with explicit abort.

use std::time::{Duration, Instant};

use thiserror::Error;

/// The search ran out of time. Propagated with `?` up the recursion; the
/// interrupted iteration is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("search deadline reached")]
pub struct SearchAborted;

/// A point in time after which the search must stop.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    limit: Instant,
}

impl Deadline {
    /// Deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            limit: start + budget,
        }
    }

    /// Deadline `ms` milliseconds from now.
    #[must_use]
    pub fn after_ms(ms: u64) -> Self {
        Self::after(Duration::from_millis(ms))
    }

    #[must_use]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.limit
    }

    /// `Err(SearchAborted)` once the deadline has passed.
    pub fn check(&self) -> Result<(), SearchAborted> {
        if self.expired() {
            Err(SearchAborted)
        } else {
            Ok(())
        }
    }

    /// Time since the deadline was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
