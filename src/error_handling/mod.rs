//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions, one enum per failure scope
//! - Processing statistics tracking (per-outcome counts and query latency)
//!
//! Only configuration and export errors end a run. Query errors are contained
//! by the batch orchestrator and recorded as the failed row's status.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ConfigError, ExportError, InitializationError, QueryError, QueryOutcome};
