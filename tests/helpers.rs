// Shared test helpers: a static in-memory resolver and host list files.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hickory_proto::rr::{DNSClass, RecordType};
use tempfile::NamedTempFile;

use dns_audit::dns::{DecodedMessage, DnsClient, EdnsInfo, QueryRequest, ResourceRecord};
use dns_audit::QueryError;

/// Answers from a fixed zone, identical on every call.
///
/// - `example.com`: one A record, one AAAA record
/// - `www.example.com`: CNAME to `example.com` followed by its A record
/// - `two.example.com`: two A records
/// - `nonexistent.invalid`: NXDOMAIN
/// - `slow<ms>.test`: one A record after sleeping `<ms>` milliseconds
/// - anything else: NOERROR without answers
#[derive(Default)]
pub struct StaticResolver {
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl StaticResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn record(record_type: RecordType, ttl: u32, value: &str) -> ResourceRecord {
    ResourceRecord {
        record_type,
        class: DNSClass::IN,
        ttl,
        values: vec![value.to_string()],
    }
}

#[async_trait]
impl DnsClient for StaticResolver {
    async fn resolve(&self, request: &QueryRequest) -> Result<DecodedMessage, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let host = request.hostname.as_str();
        if let Some(millis) = host
            .strip_prefix("slow")
            .and_then(|rest| rest.strip_suffix(".test"))
            .and_then(|ms| ms.parse::<u64>().ok())
        {
            tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
        }

        let answers: Vec<ResourceRecord> = match (host, request.record_type) {
            ("nonexistent.invalid", _) => return Err(QueryError::NxDomain),
            ("example.com", RecordType::A) => {
                vec![record(RecordType::A, 300, "93.184.216.34")]
            }
            ("example.com", RecordType::AAAA) => {
                vec![record(
                    RecordType::AAAA,
                    300,
                    "2606:2800:220:1:248:1893:25c8:1946",
                )]
            }
            ("www.example.com", RecordType::A) => vec![
                record(RecordType::CNAME, 60, "example.com."),
                record(RecordType::A, 300, "93.184.216.34"),
            ],
            ("two.example.com", RecordType::A) => vec![
                record(RecordType::A, 60, "192.0.2.1"),
                record(RecordType::A, 60, "192.0.2.2"),
            ],
            (h, RecordType::A) if h.starts_with("slow") => {
                vec![record(RecordType::A, 60, "192.0.2.10")]
            }
            _ => return Err(QueryError::NoAnswer),
        };

        Ok(DecodedMessage {
            id: 7,
            opcode: 0,
            rcode_low: 0,
            flags: 0x8180,
            edns: Some(EdnsInfo {
                version: 0,
                rcode_high: 0,
                flags: 0,
                payload: 1232,
            }),
            answers,
        })
    }

    fn server_label(&self, request: &QueryRequest) -> String {
        request
            .server
            .map_or_else(|| "192.0.2.53".to_string(), |s| s.ip().to_string())
    }
}

/// Writes `contents` to a temporary host list file.
#[allow(dead_code)]
pub fn host_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create host list");
    file.write_all(contents.as_bytes())
        .expect("Failed to write host list");
    file
}

/// Converts host names to the owned form the orchestrator takes.
#[allow(dead_code)]
pub fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(|h| h.to_string()).collect()
}
