//! Host list reading and validation.

use std::path::Path;

use log::info;
use tokio::io::AsyncReadExt;

use crate::dns::parse_query_name;
use crate::error_handling::ConfigError;

/// Reads hostnames from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `ConfigError::HostListRead` if the source cannot be read and
/// `ConfigError::InvalidHost` for the first line that is not a DNS name.
pub async fn read_hosts(path: &Path) -> Result<Vec<String>, ConfigError> {
    let read_error = |source: std::io::Error| ConfigError::HostListRead {
        path: path.to_path_buf(),
        source,
    };

    let contents = if path.as_os_str() == "-" {
        info!("Reading hosts from stdin");
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .map_err(read_error)?;
        buf
    } else {
        tokio::fs::read_to_string(path).await.map_err(read_error)?
    };

    let hosts = parse_host_lines(&contents)?;
    info!("Total hosts in list: {}", hosts.len());
    Ok(hosts)
}

/// Parses host list text: one name per line, `#` comments and blank lines skipped.
///
/// Surrounding whitespace and a single trailing dot are removed.
pub fn parse_host_lines(contents: &str) -> Result<Vec<String>, ConfigError> {
    let mut hosts = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let host = trimmed.strip_suffix('.').unwrap_or(trimmed);
        let invalid = |reason: String| ConfigError::InvalidHost {
            line: index + 1,
            host: trimmed.to_string(),
            reason,
        };
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(invalid("not a single DNS name".to_string()));
        }
        parse_query_name(host).map_err(|e| invalid(e.to_string()))?;
        hosts.push(host.to_string());
    }
    Ok(hosts)
}
