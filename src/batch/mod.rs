//! Batch orchestration.
//!
//! Runs one query per (host, record type) pair, in host order then roster
//! order, and collects one row per query into a [`ResultTable`]. A failed query
//! becomes a metadata-only row whose `status` carries the failure; it never
//! stops the batch.

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use chrono::Local;
use futures::stream::{self, StreamExt};
use hickory_proto::rr::RecordType;
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::app::log_progress;
use crate::config::{DEFAULT_MAX_CONCURRENCY, DNS_TIMEOUT, LOGGING_INTERVAL, SUCCESS_STATUS};
use crate::dns::render::record_type_text;
use crate::dns::{DnsClient, Protocol, QueryRequest};
use crate::error_handling::{ProcessingStats, QueryOutcome};
use crate::flatten::flatten;
use crate::roster::RecordRoster;
use crate::table::{ResultTable, Row};

/// Immutable per-run query settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSettings {
    /// Server override applied to every query
    pub server: Option<SocketAddr>,
    /// Per-query timeout
    pub timeout: Duration,
    /// Transport for every query
    pub protocol: Protocol,
    /// Maximum queries in flight; values below 1 are treated as 1
    pub max_concurrency: usize,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            server: None,
            timeout: DNS_TIMEOUT,
            protocol: Protocol::Udp,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

/// Drives a batch of queries through a [`DnsClient`].
pub struct BatchOrchestrator<C> {
    client: C,
    settings: BatchSettings,
    cancel: CancellationToken,
    stats: ProcessingStats,
}

impl<C: DnsClient> BatchOrchestrator<C> {
    pub fn new(client: C, settings: BatchSettings) -> Self {
        Self {
            client,
            settings,
            cancel: CancellationToken::new(),
            stats: ProcessingStats::new(),
        }
    }

    /// Stops the run early when `cancel` is tripped.
    ///
    /// Rows completed before cancellation are kept; in-flight queries are dropped.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn settings(&self) -> &BatchSettings {
        &self.settings
    }

    /// Outcome and latency counters for every query run so far.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Queries every roster type for every host and returns the rows in that order.
    ///
    /// With `max_concurrency > 1` queries overlap and a slow query does not
    /// hold back the others; rows are still returned in host/roster order.
    /// After cancellation only completed rows are returned, in that same order.
    pub async fn run(&self, hosts: &[String], roster: &RecordRoster) -> ResultTable {
        let total = hosts.len() * roster.len();
        let concurrency = self.settings.max_concurrency.max(1);
        info!(
            "Running {} queries ({} hosts x {} record types, concurrency {})",
            total,
            hosts.len(),
            roster.len(),
            concurrency
        );

        let start_time = Instant::now();
        let jobs = hosts
            .iter()
            .flat_map(|host| roster.iter().map(move |record_type| (host, record_type)))
            .enumerate();
        // Rows complete out of order; each is stored at its job index.
        let mut rows = stream::iter(jobs)
            .map(|(index, (host, record_type))| async move {
                (index, self.query_row(host, record_type, roster).await)
            })
            .buffer_unordered(concurrency);

        let mut slots: Vec<Option<Row>> = vec![None; total];
        let mut completed = 0;
        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    warn!("Run interrupted after {} of {} queries", completed, total);
                    break;
                }
                next = rows.next() => match next {
                    Some((index, row)) => {
                        slots[index] = Some(row);
                        completed += 1;
                        if completed % LOGGING_INTERVAL == 0 {
                            log_progress(start_time, completed, total);
                        }
                    }
                    None => break,
                },
            }
        }

        slots.into_iter().flatten().collect()
    }

    async fn query_row(&self, hostname: &str, record_type: RecordType, roster: &RecordRoster) -> Row {
        let request = QueryRequest::new(
            hostname,
            record_type,
            self.settings.server,
            self.settings.timeout,
            self.settings.protocol,
        );

        let mut row = Row::new();
        row.set("datetime", Local::now());
        row.set("dns_server", self.client.server_label(&request));
        row.set("hostname", hostname);
        row.set("status", SUCCESS_STATUS);
        row.set("record_type", record_type_text(record_type));

        let started = Instant::now();
        match self.client.resolve(&request).await {
            Ok(message) => {
                self.stats.record(QueryOutcome::Answered, started.elapsed());
                debug!(
                    "{} {}: {} answer records",
                    hostname,
                    record_type_text(record_type),
                    message.answers.len()
                );
                row.extend(flatten(&message, roster));
            }
            Err(e) => {
                self.stats.record(e.outcome(), started.elapsed());
                warn!("{} {}: {}", hostname, record_type_text(record_type), e);
                row.set("status", e.to_string());
            }
        }
        row
    }
}
