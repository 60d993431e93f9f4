//! Processing statistics tracking.
//!
//! This module provides thread-safe statistics tracking for query outcomes and
//! query latency during a batch run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use strum::IntoEnumIterator;

use super::types::QueryOutcome;

/// Thread-safe processing statistics tracker.
///
/// Tracks one atomic counter per [`QueryOutcome`], all initialized to zero on
/// creation, plus the sum and maximum of query latencies in microseconds.
pub struct ProcessingStats {
    outcomes: HashMap<QueryOutcome, AtomicUsize>,
    latency_sum_us: AtomicU64,
    latency_max_us: AtomicU64,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in QueryOutcome::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }

        ProcessingStats {
            outcomes,
            latency_sum_us: AtomicU64::new(0),
            latency_max_us: AtomicU64::new(0),
        }
    }

    /// Records the outcome and latency of one query.
    pub fn record(&self, outcome: QueryOutcome, elapsed: Duration) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                outcome
            );
        }

        let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.latency_sum_us.fetch_add(micros, Ordering::Relaxed);
        self.latency_max_us.fetch_max(micros, Ordering::Relaxed);
    }

    /// Get the count for an outcome.
    pub fn get_count(&self, outcome: QueryOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of recorded queries.
    pub fn total(&self) -> usize {
        QueryOutcome::iter().map(|o| self.get_count(o)).sum()
    }

    /// Number of recorded queries that failed.
    pub fn total_failures(&self) -> usize {
        QueryOutcome::iter()
            .filter(QueryOutcome::is_failure)
            .map(|o| self.get_count(o))
            .sum()
    }

    /// Average query latency in milliseconds, 0 when nothing was recorded.
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let avg_us = self.latency_sum_us.load(Ordering::SeqCst) as f64 / total as f64;
        avg_us / 1000.0
    }

    /// Slowest query latency in milliseconds.
    pub fn max_latency_ms(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let max_us = self.latency_max_us.load(Ordering::SeqCst) as f64;
        max_us / 1000.0
    }
}
