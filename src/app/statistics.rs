//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ProcessingStats, QueryOutcome};

/// Logs the per-outcome breakdown and query latency of a finished run.
pub fn print_query_statistics(stats: &ProcessingStats) {
    let total = stats.total();
    if total == 0 {
        info!("No queries were run");
        return;
    }

    info!("Query Outcomes ({} total):", total);
    for outcome in QueryOutcome::iter() {
        let count = stats.get_count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }

    info!(
        "Query latency: avg {:.1} ms, max {:.1} ms",
        stats.average_latency_ms(),
        stats.max_latency_ms()
    );
}

/// Logs a one-line summary of the run.
pub fn print_simple_summary(total: usize, successful: usize, failed: usize, elapsed_seconds: f64) {
    info!(
        "Ran {} quer{} ({} answered, {} failed) in {:.1}s",
        total,
        if total == 1 { "y" } else { "ies" },
        successful,
        failed,
        elapsed_seconds
    );
}
