//! Audit entry point.
//!
//! [`run_audit`] wires configuration, host list, resolver client, batch
//! orchestrator and exporter together.

mod finalize;
mod init;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::app::{shutdown_gracefully, spawn_interrupt_listener};
use crate::batch::BatchOrchestrator;
use crate::config::Config;
use crate::dns::{DnsClient, NetworkClient};
use crate::initialization::init_default_server;

use finalize::finalize_audit;
use init::{prepare_audit, AuditPlan};

/// Results of an audit run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Queries that produced a row (answered or failed)
    pub total_queries: usize,
    /// Queries answered by the server
    pub successful: usize,
    /// Queries that failed (no answer, NXDOMAIN, timeout, ...)
    pub failed: usize,
    /// Hosts read from the host list
    pub hosts: usize,
    /// Record types queried per host
    pub record_types: usize,
    /// Rows written to the output file
    pub rows_written: usize,
    /// Path of the exported table
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
    /// Whether the run was stopped by Ctrl-C before every query completed
    pub interrupted: bool,
}

/// Runs an audit with the provided configuration.
///
/// Reads the host list, queries every requested record type for every host,
/// and writes one row per query to `config.output`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the host list cannot be
/// read, no DNS server is available, or the table cannot be exported.
/// Individual query failures are not errors; they are recorded in the table.
///
/// # Example
///
/// ```no_run
/// use dns_audit::{run_audit, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     input: PathBuf::from("hosts.txt"),
///     output: PathBuf::from("dns_results.csv"),
///     ..Default::default()
/// };
/// let report = run_audit(config).await?;
/// println!("{} queries, {} failed", report.total_queries, report.failed);
/// # Ok(())
/// # }
/// ```
pub async fn run_audit(config: Config) -> Result<AuditReport> {
    let plan = prepare_audit(&config).await?;
    let default_server = match plan.settings.server {
        Some(server) => server,
        None => init_default_server().context("Failed to find a DNS server")?,
    };
    let client = NetworkClient::new(default_server);
    execute_audit(&config, plan, client).await
}

/// Runs an audit through a caller-supplied [`DnsClient`].
///
/// Validation, host list reading and export behave exactly as in [`run_audit`].
pub async fn run_audit_with_client<C: DnsClient>(config: Config, client: C) -> Result<AuditReport> {
    let plan = prepare_audit(&config).await?;
    execute_audit(&config, plan, client).await
}

async fn execute_audit<C: DnsClient>(
    config: &Config,
    plan: AuditPlan,
    client: C,
) -> Result<AuditReport> {
    let start_time = Instant::now();
    let cancel = CancellationToken::new();
    let listener = spawn_interrupt_listener(cancel.clone());

    let orchestrator =
        BatchOrchestrator::new(client, plan.settings.clone()).with_cancellation(cancel.clone());
    let table = orchestrator.run(&plan.hosts, &plan.roster).await;
    let interrupted =
        orchestrator.is_cancelled() && table.len() < plan.hosts.len() * plan.roster.len();

    shutdown_gracefully(cancel, listener).await;

    finalize_audit(
        &plan,
        table,
        orchestrator.stats(),
        &config.output,
        start_time,
        interrupted,
    )
}
