//! DNS query and decoded-response types.
//!
//! These types sit between the wire codec (`hickory-proto`) and the flattener:
//! the client decodes a `hickory_proto::op::Message` into a [`DecodedMessage`]
//! and everything downstream works on that.

use std::net::SocketAddr;
use std::time::Duration;

use hickory_proto::rr::{DNSClass, RecordType};

/// Transport used to send a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// UDP datagram (default)
    #[default]
    Udp,
    /// TCP with two-byte length framing
    Tcp,
}

/// One DNS query for a (hostname, record type) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Name to resolve, as read from the host list
    pub hostname: String,
    /// Record type to ask for
    pub record_type: RecordType,
    /// Server override; `None` uses the client's default server
    pub server: Option<SocketAddr>,
    /// Per-query timeout
    pub timeout: Duration,
    /// Transport
    pub protocol: Protocol,
}

impl QueryRequest {
    pub fn new(
        hostname: impl Into<String>,
        record_type: RecordType,
        server: Option<SocketAddr>,
        timeout: Duration,
        protocol: Protocol,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            record_type,
            server,
            timeout,
            protocol,
        }
    }
}

/// EDNS(0) data carried in the OPT pseudo-record of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdnsInfo {
    /// EDNS version (0 for EDNS0)
    pub version: u8,
    /// Upper 8 bits of the extended response code
    pub rcode_high: u8,
    /// EDNS flag bits (`DO` is 0x8000)
    pub flags: u16,
    /// Advertised UDP payload size
    pub payload: u16,
}

/// One answer-section resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub record_type: RecordType,
    pub class: DNSClass,
    pub ttl: u32,
    /// Presentation-format values. TXT records carry one value per character-string.
    pub values: Vec<String>,
}

/// A successfully decoded DNS response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub id: u16,
    pub opcode: u8,
    /// Low 4 bits of the response code, from the header
    pub rcode_low: u8,
    /// Header flag bits in their wire positions (see `render::FLAG_*`)
    pub flags: u16,
    pub edns: Option<EdnsInfo>,
    pub answers: Vec<ResourceRecord>,
}

impl DecodedMessage {
    /// Full response code: EDNS high bits shifted over the header nibble (RFC 6891).
    pub fn rcode(&self) -> u16 {
        let high = self.edns.map_or(0, |edns| u16::from(edns.rcode_high));
        (high << 4) | u16::from(self.rcode_low & 0x0F)
    }
}
