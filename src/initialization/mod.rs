//! Application initialization and resource setup.
//!
//! This module provides the functions that run before any query is sent:
//! - Logger setup
//! - DNS server selection (system configuration or `--server` override)

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_default_server, parse_server};
