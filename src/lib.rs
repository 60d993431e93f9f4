//! dns_audit library: bulk DNS resolution into a flat table
//!
//! This library resolves a list of hostnames for a set of record types and
//! turns every decoded response into one row of a table whose columns are
//! derived from the answers themselves (`A-1`, `A-class1`, `A-ttl1`, ...,
//! `A records`). The table is exported as CSV or JSONL.
//!
//! # Example
//!
//! ```no_run
//! use dns_audit::{Config, run_audit};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("hosts.txt"),
//!     output: std::path::PathBuf::from("dns_results.csv"),
//!     records: "A,AAAA,MX".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(config).await?;
//! println!("Ran {} queries: {} answered, {} failed",
//!          report.total_queries, report.successful, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod batch;
pub mod config;
pub mod dns;
mod error_handling;
pub mod export;
pub mod flatten;
pub mod initialization;
pub mod roster;
mod run;
pub mod table;

// Re-export public API
pub use app::{parse_host_lines, read_hosts};
pub use batch::{BatchOrchestrator, BatchSettings};
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use error_handling::{
    ConfigError, ExportError, InitializationError, ProcessingStats, QueryError, QueryOutcome,
};
pub use roster::RecordRoster;
pub use run::{run_audit, run_audit_with_client, AuditReport};
pub use table::{ResultTable, Row, Value};
