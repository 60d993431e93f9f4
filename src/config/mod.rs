//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, payload sizes, defaults)
//! - CLI option types and parsing
//! - The library-level `Config` used by `run_audit`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, Opt};
