//! Main application modules.
//!
//! This module provides host list reading, progress logging, interrupt handling
//! and statistics printing used by the run entry point.

pub mod hosts;
pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use hosts::{parse_host_lines, read_hosts};
pub use logging::log_progress;
pub use shutdown::{shutdown_gracefully, spawn_interrupt_listener};
pub use statistics::{print_query_statistics, print_simple_summary};
