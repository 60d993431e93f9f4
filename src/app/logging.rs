//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs how many queries have completed and the current query rate.
///
/// # Arguments
///
/// * `start_time` - When the batch started
/// * `completed` - Queries completed so far
/// * `total` - Queries in the batch
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Completed {}/{} queries in {:.2} seconds (~{:.2} queries/sec)",
        completed, total, elapsed_secs, rate
    );
}
