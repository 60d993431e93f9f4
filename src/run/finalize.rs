//! Audit finalization.
//!
//! Exports the table, logs statistics and builds the report. Runs for
//! interrupted audits too, so completed rows are never lost.

use std::time::Instant;

use anyhow::{Context, Result};
use log::warn;

use crate::app::{log_progress, print_query_statistics, print_simple_summary};
use crate::error_handling::{ProcessingStats, QueryOutcome};
use crate::export::export_table;
use crate::table::ResultTable;

use super::init::AuditPlan;
use super::AuditReport;

/// Exports `table` and produces the final report.
///
/// # Errors
///
/// Returns an error if the table cannot be written.
pub(crate) fn finalize_audit(
    plan: &AuditPlan,
    table: ResultTable,
    stats: &ProcessingStats,
    output: &std::path::Path,
    start_time: Instant,
    interrupted: bool,
) -> Result<AuditReport> {
    let expected = plan.hosts.len() * plan.roster.len();
    log_progress(start_time, table.len(), expected);
    if interrupted {
        warn!(
            "Exporting partial results: {} of {} queries completed",
            table.len(),
            expected
        );
    }

    let rows_written = export_table(&table, output, plan.format)
        .with_context(|| format!("Failed to export results to {}", output.display()))?;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    let successful = stats.get_count(QueryOutcome::Answered);
    let failed = stats.total_failures();
    print_query_statistics(stats);
    print_simple_summary(table.len(), successful, failed, elapsed_seconds);

    Ok(AuditReport {
        total_queries: table.len(),
        successful,
        failed,
        hosts: plan.hosts.len(),
        record_types: plan.roster.len(),
        rows_written,
        output_path: output.to_path_buf(),
        elapsed_seconds,
        interrupted,
    })
}
