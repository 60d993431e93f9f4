//! Configuration constants.
//!
//! This module defines the operational parameters shared by the resolver client,
//! the batch orchestrator and the CLI defaults.

use std::time::Duration;

/// Per-query DNS timeout in seconds.
pub const DNS_TIMEOUT_SECS: u64 = 15;

/// Per-query DNS timeout as a `Duration`.
pub const DNS_TIMEOUT: Duration = Duration::from_secs(DNS_TIMEOUT_SECS);

/// Record types queried for every host when none are given.
pub const DEFAULT_RECORD_TYPES: &str = "A,AAAA";

/// Default number of queries in flight. One keeps the run strictly sequential.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Standard DNS port used when a server override carries no port.
pub const DNS_PORT: u16 = 53;

/// UDP payload size advertised in the EDNS0 OPT record of every query.
pub const MAX_UDP_PAYLOAD: u16 = 4096;

/// Largest message accepted over TCP (two-byte length prefix).
pub const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// Number of completed queries between progress log lines.
pub const LOGGING_INTERVAL: usize = 25;

/// Row status for a query that produced a decoded answer.
pub const SUCCESS_STATUS: &str = "The DNS has responded";

/// Default failure percentage threshold for `--fail-on pct-greater-than`.
pub const DEFAULT_FAIL_ON_PCT_THRESHOLD: u8 = 10;
