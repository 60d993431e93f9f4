//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and the exit code policy
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_audit::config::Opt;
use dns_audit::initialization::init_logger_with;
use dns_audit::{run_audit, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on;
    let pct_threshold = config.fail_on_pct_threshold;

    match run_audit(config).await {
        Ok(report) => {
            println!(
                "Ran {} quer{} for {} host{} ({} answered, {} failed) in {:.1}s",
                report.total_queries,
                if report.total_queries == 1 { "y" } else { "ies" },
                report.hosts,
                if report.hosts == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            if report.interrupted {
                println!("Run was interrupted; the table holds the completed queries only");
            }
            println!("Results saved in {}", report.output_path.display());

            let code = fail_on.exit_code(pct_threshold, report.total_queries, report.failed);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
