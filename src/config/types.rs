//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_FAIL_ON_PCT_THRESHOLD, DEFAULT_MAX_CONCURRENCY, DEFAULT_RECORD_TYPES, DNS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy applied once the table has been exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 when the run completes (default)
    Never,
    /// Exit 2 if any query failed
    AnyFailure,
    /// Exit 2 if the failure percentage exceeds `--fail-on-pct-threshold`
    PctGreaterThan,
}

impl FailOn {
    /// Returns the process exit code for a finished run.
    ///
    /// An empty run never trips the percentage policy.
    pub fn exit_code(&self, pct_threshold: u8, total: usize, failed: usize) -> i32 {
        match self {
            FailOn::Never => 0,
            FailOn::AnyFailure => {
                if failed > 0 {
                    2
                } else {
                    0
                }
            }
            FailOn::PctGreaterThan => {
                if total == 0 {
                    return 0;
                }
                #[allow(clippy::cast_precision_loss)]
                let failure_pct = (failed as f64 / total as f64) * 100.0;
                if failure_pct > f64::from(pct_threshold) {
                    2
                } else {
                    0
                }
            }
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # A and AAAA for every host, system resolver
/// dns_audit -i hosts.txt -o dns_results.csv
///
/// # MX and TXT against a specific server over TCP
/// dns_audit -i hosts.txt -o dns_results.csv -r mx,txt -s 9.9.9.9 --tcp
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dns_audit",
    about = "Resolves a list of hosts and exports every DNS answer into a table."
)]
pub struct Opt {
    /// File with one hostname per line (`-` reads stdin)
    #[arg(short, long, value_parser)]
    pub input: PathBuf,

    /// Output table path (.csv or .jsonl)
    #[arg(short, long, value_parser)]
    pub output: PathBuf,

    /// DNS server to query instead of the system resolver (IP or IP:port)
    #[arg(short, long)]
    pub server: Option<String>,

    /// Comma-separated record types to query for every host
    #[arg(short, long, default_value = DEFAULT_RECORD_TYPES)]
    pub records: String,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Send queries over TCP instead of UDP
    #[arg(long)]
    pub tcp: bool,

    /// Maximum queries in flight (1 keeps the run sequential)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit code policy: never|any-failure|pct-greater-than
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Failure percentage used by `--fail-on pct-greater-than`
    #[arg(long, default_value_t = DEFAULT_FAIL_ON_PCT_THRESHOLD)]
    pub fail_on_pct_threshold: u8,
}

/// Library configuration (no CLI dependencies).
///
/// This is the configuration consumed by [`crate::run_audit`]. It can be
/// constructed programmatically without going through `clap`.
///
/// # Examples
///
/// ```no_run
/// use dns_audit::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("hosts.txt"),
///     output: PathBuf::from("dns_results.csv"),
///     records: "A,AAAA,MX".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read hostnames from (`-` for stdin)
    pub input: PathBuf,

    /// Output table path; the extension selects the export format
    pub output: PathBuf,

    /// DNS server override (IP or IP:port)
    pub server: Option<String>,

    /// Comma-separated record types
    pub records: String,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// Query over TCP instead of UDP
    pub tcp: bool,

    /// Maximum queries in flight
    pub max_concurrency: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit code policy
    pub fail_on: FailOn,

    /// Threshold for `FailOn::PctGreaterThan`
    pub fail_on_pct_threshold: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("hosts.txt"),
            output: PathBuf::from("dns_results.csv"),
            server: None,
            records: DEFAULT_RECORD_TYPES.to_string(),
            timeout_seconds: DNS_TIMEOUT_SECS,
            tcp: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
            fail_on_pct_threshold: DEFAULT_FAIL_ON_PCT_THRESHOLD,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output: opt.output,
            server: opt.server,
            records: opt.records,
            timeout_seconds: opt.timeout_seconds,
            tcp: opt.tcp,
            max_concurrency: opt.max_concurrency,
            log_level: opt.log_level,
            log_format: opt.log_format,
            fail_on: opt.fail_on,
            fail_on_pct_threshold: opt.fail_on_pct_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.records, "A,AAAA");
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.max_concurrency, 1);
        assert!(config.server.is_none());
        assert!(!config.tcp);
        assert_eq!(config.fail_on, FailOn::Never);
    }

    #[test]
    fn test_opt_minimal_parse() {
        let opt = Opt::try_parse_from(["dns_audit", "-i", "hosts.txt", "-o", "out.csv"])
            .expect("Should parse required flags");
        let config = Config::from(opt);
        assert_eq!(config.input, PathBuf::from("hosts.txt"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.records, "A,AAAA");
        assert_eq!(config.timeout_seconds, 15);
    }

    #[test]
    fn test_opt_requires_output() {
        let result = Opt::try_parse_from(["dns_audit", "-i", "hosts.txt"]);
        assert!(result.is_err(), "Missing --output should be rejected");
    }

    #[test]
    fn test_fail_on_never() {
        assert_eq!(FailOn::Never.exit_code(10, 10, 10), 0);
    }

    #[test]
    fn test_fail_on_any_failure() {
        assert_eq!(FailOn::AnyFailure.exit_code(10, 10, 0), 0);
        assert_eq!(FailOn::AnyFailure.exit_code(10, 10, 1), 2);
    }

    #[test]
    fn test_fail_on_pct_threshold() {
        assert_eq!(FailOn::PctGreaterThan.exit_code(10, 100, 10), 0);
        assert_eq!(FailOn::PctGreaterThan.exit_code(10, 100, 11), 2);
        assert_eq!(FailOn::PctGreaterThan.exit_code(10, 0, 0), 0);
    }
}
