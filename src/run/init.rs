//! Audit preparation.
//!
//! Everything that can be rejected is validated here, before any query runs:
//! output format, record types, server override, then the host list.

use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use crate::app::read_hosts;
use crate::batch::BatchSettings;
use crate::config::Config;
use crate::dns::render::record_type_text;
use crate::dns::Protocol;
use crate::export::ExportFormat;
use crate::initialization::parse_server;
use crate::roster::RecordRoster;

/// Validated inputs of one audit run.
#[derive(Debug)]
pub(crate) struct AuditPlan {
    pub hosts: Vec<String>,
    pub roster: RecordRoster,
    pub format: ExportFormat,
    pub settings: BatchSettings,
}

/// Validates `config` and reads the host list.
///
/// # Errors
///
/// Returns the first configuration error found, wrapped with context.
pub(crate) async fn prepare_audit(config: &Config) -> Result<AuditPlan> {
    let format = ExportFormat::from_path(&config.output).context("Invalid output file")?;
    let roster = RecordRoster::parse(&config.records).context("Invalid --records value")?;
    let server = config
        .server
        .as_deref()
        .map(parse_server)
        .transpose()
        .context("Invalid --server value")?;

    let hosts = read_hosts(&config.input)
        .await
        .context("Failed to load host list")?;

    let settings = BatchSettings {
        server,
        timeout: Duration::from_secs(config.timeout_seconds),
        protocol: if config.tcp {
            Protocol::Tcp
        } else {
            Protocol::Udp
        },
        max_concurrency: config.max_concurrency.max(1),
    };

    info!(
        "Auditing {} hosts for record types {} over {:?}",
        hosts.len(),
        roster
            .iter()
            .map(record_type_text)
            .collect::<Vec<_>>()
            .join(","),
        settings.protocol
    );

    Ok(AuditPlan {
        hosts,
        roster,
        format,
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ConfigError;
    use std::path::PathBuf;

    fn config(output: &str, records: &str) -> Config {
        Config {
            // The host list is read last, so a missing file proves validation ran first.
            input: PathBuf::from("/nonexistent/hosts.txt"),
            output: PathBuf::from(output),
            records: records.to_string(),
            ..Default::default()
        }
    }

    fn config_error(err: &anyhow::Error) -> Option<&ConfigError> {
        err.chain().find_map(|cause| cause.downcast_ref::<ConfigError>())
    }

    #[tokio::test]
    async fn test_output_extension_checked_first() {
        let err = prepare_audit(&config("results.xlsx", "BOGUS"))
            .await
            .unwrap_err();
        assert!(matches!(
            config_error(&err),
            Some(ConfigError::InvalidOutputExtension(_))
        ));
    }

    #[tokio::test]
    async fn test_record_types_checked_before_hosts() {
        let err = prepare_audit(&config("results.csv", "A,BOGUS"))
            .await
            .unwrap_err();
        assert!(matches!(
            config_error(&err),
            Some(ConfigError::InvalidRecordType(t)) if t == "BOGUS"
        ));
    }

    #[tokio::test]
    async fn test_server_checked_before_hosts() {
        let mut cfg = config("results.csv", "A");
        cfg.server = Some("dns.google".to_string());
        let err = prepare_audit(&cfg).await.unwrap_err();
        assert!(matches!(
            config_error(&err),
            Some(ConfigError::InvalidServer(_))
        ));
    }

    #[tokio::test]
    async fn test_settings_from_config() {
        let mut hosts = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut hosts, b"example.com\n").unwrap();
        let cfg = Config {
            input: hosts.path().to_path_buf(),
            output: PathBuf::from("results.jsonl"),
            server: Some("127.0.0.1:5353".to_string()),
            timeout_seconds: 3,
            tcp: true,
            max_concurrency: 0,
            ..Default::default()
        };

        let plan = prepare_audit(&cfg).await.unwrap();
        assert_eq!(plan.hosts, vec!["example.com"]);
        assert_eq!(plan.format, ExportFormat::Jsonl);
        assert_eq!(plan.settings.protocol, Protocol::Tcp);
        assert_eq!(plan.settings.timeout, Duration::from_secs(3));
        assert_eq!(plan.settings.max_concurrency, 1);
        assert_eq!(
            plan.settings.server,
            Some("127.0.0.1:5353".parse().unwrap())
        );
    }
}
