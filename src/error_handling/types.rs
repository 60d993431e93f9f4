//! Error type definitions.
//!
//! This module defines every error kind used throughout the application, one enum
//! per failure scope: initialization, configuration, a single query, and export.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Configuration errors.
///
/// These are raised before any query is sent and terminate the run.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The output path does not end in a supported table extension.
    #[error("Output file {} must end in .csv or .jsonl", .0.display())]
    InvalidOutputExtension(PathBuf),

    /// A requested record type is not a DNS record type mnemonic.
    #[error("Invalid record type: '{0}'")]
    InvalidRecordType(String),

    /// No record type was requested.
    #[error("At least one record type must be requested")]
    EmptyRoster,

    /// A line of the host list is not a valid DNS name.
    #[error("Invalid hostname '{host}' on line {line}: {reason}")]
    InvalidHost {
        /// 1-based line number in the host list
        line: usize,
        /// The offending line, trimmed
        host: String,
        /// Why the name was rejected
        reason: String,
    },

    /// The host list could not be read.
    #[error("Failed to read host list {}: {source}", .path.display())]
    HostListRead {
        /// Host list path (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The DNS server override is neither `IP` nor `IP:port`.
    #[error("Invalid DNS server address: '{0}'")]
    InvalidServer(String),

    /// The system resolver configuration has no usable nameserver.
    #[error("No nameserver available from the system resolver configuration: {0}")]
    NoSystemNameserver(String),
}

/// Failure of a single (hostname, record type) query.
///
/// The display strings are the short status recorded in the failed row.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The server answered NOERROR but nothing of the requested type.
    #[error("The DNS response does not contain an answer to the question")]
    NoAnswer,

    /// The server answered NXDOMAIN.
    #[error("The DNS query name does not exist")]
    NxDomain,

    /// No response arrived within the per-query timeout.
    #[error("The DNS operation timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// The server answered with any other error rcode.
    #[error("The DNS server answered {0}")]
    ServerFailure(String),

    /// Sending or receiving failed at the socket level.
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    /// The response could not be decoded or did not match the query.
    #[error("Malformed DNS response: {0}")]
    Malformed(String),
}

impl QueryError {
    /// Maps the error to its statistics bucket.
    pub fn outcome(&self) -> QueryOutcome {
        match self {
            QueryError::NoAnswer => QueryOutcome::NoAnswer,
            QueryError::NxDomain => QueryOutcome::NxDomain,
            QueryError::Timeout(_) => QueryOutcome::Timeout,
            QueryError::ServerFailure(_) => QueryOutcome::ServerFailure,
            QueryError::Network(_) => QueryOutcome::Network,
            QueryError::Malformed(_) => QueryOutcome::Malformed,
        }
    }
}

/// Errors raised while writing the result table.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV writer failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// A row could not be serialized to JSON.
    #[error("JSONL export error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of one query, used for run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum QueryOutcome {
    Answered,
    NoAnswer,
    NxDomain,
    Timeout,
    ServerFailure,
    Network,
    Malformed,
}

impl std::fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOutcome::Answered => "Answered",
            QueryOutcome::NoAnswer => "No answer",
            QueryOutcome::NxDomain => "Name does not exist",
            QueryOutcome::Timeout => "Timeout",
            QueryOutcome::ServerFailure => "Server failure",
            QueryOutcome::Network => "Network error",
            QueryOutcome::Malformed => "Malformed response",
        }
    }

    /// Whether the outcome counts as a failed query.
    pub fn is_failure(&self) -> bool {
        !matches!(self, QueryOutcome::Answered)
    }
}
