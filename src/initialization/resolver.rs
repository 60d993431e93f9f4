//! DNS server selection.
//!
//! Queries go either to the `--server` override or to the first nameserver of
//! the system resolver configuration (`/etc/resolv.conf` on Unix).

use std::net::{IpAddr, SocketAddr};

use hickory_resolver::system_conf::read_system_conf;
use log::debug;

use crate::config::DNS_PORT;
use crate::error_handling::ConfigError;

/// Reads the first nameserver of the system resolver configuration.
///
/// Later nameservers are ignored; every query without `--server` goes to this one.
///
/// # Errors
///
/// Returns `ConfigError::NoSystemNameserver` if the configuration cannot be
/// read or lists no nameserver.
pub fn init_default_server() -> Result<SocketAddr, ConfigError> {
    let (config, _opts) =
        read_system_conf().map_err(|e| ConfigError::NoSystemNameserver(e.to_string()))?;

    let server = first_server(config.name_servers().iter().map(|ns| ns.socket_addr))?;
    debug!("System nameserver: {}", server);
    Ok(server)
}

fn first_server(servers: impl IntoIterator<Item = SocketAddr>) -> Result<SocketAddr, ConfigError> {
    servers.into_iter().next().ok_or_else(|| {
        ConfigError::NoSystemNameserver("resolver configuration lists no nameservers".to_string())
    })
}

/// Parses a `--server` value: `IP`, `IP:port` or `[IPv6]:port`.
///
/// A bare address uses port 53.
pub fn parse_server(server: &str) -> Result<SocketAddr, ConfigError> {
    let server = server.trim();
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|_| ConfigError::InvalidServer(server.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_forms() {
        assert_eq!(
            parse_server("9.9.9.9").unwrap(),
            "9.9.9.9:53".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            parse_server(" 127.0.0.1:5353 ").unwrap(),
            "127.0.0.1:5353".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            parse_server("2001:4860:4860::8888").unwrap(),
            "[2001:4860:4860::8888]:53".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            parse_server("[::1]:8053").unwrap(),
            "[::1]:8053".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_first_server_takes_configuration_order() {
        let servers: Vec<SocketAddr> = vec![
            "192.0.2.1:53".parse().unwrap(),
            "192.0.2.2:53".parse().unwrap(),
        ];
        assert_eq!(first_server(servers.clone()).unwrap(), servers[0]);
        assert!(matches!(
            first_server(Vec::new()),
            Err(ConfigError::NoSystemNameserver(_))
        ));
    }

    #[test]
    fn test_parse_server_rejects_hostnames() {
        for bad in ["dns.google", "", "1.2.3.4:notaport", "300.1.1.1"] {
            assert!(
                matches!(parse_server(bad), Err(ConfigError::InvalidServer(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
