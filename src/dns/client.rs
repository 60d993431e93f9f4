//! Resolver client.
//!
//! [`DnsClient`] is the seam between the batch orchestrator and the network:
//! one call sends exactly one query and returns either a decoded response or a
//! typed [`QueryError`]. [`NetworkClient`] is the production implementation.

use std::net::SocketAddr;

use async_trait::async_trait;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};

use crate::config::MAX_UDP_PAYLOAD;
use crate::error_handling::QueryError;

use super::decode::decode_response;
use super::render::rcode_text;
use super::transport::exchange;
use super::types::{DecodedMessage, QueryRequest};

/// Issues single DNS queries.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Resolves one (hostname, record type) pair.
    ///
    /// No retry is attempted; a failure is final for this request.
    async fn resolve(&self, request: &QueryRequest) -> Result<DecodedMessage, QueryError>;

    /// Label of the server `request` is (or would be) sent to, for report metadata.
    fn server_label(&self, request: &QueryRequest) -> String;
}

/// Sends queries over the network with `hickory-proto` as the wire codec.
///
/// Requests without a server override go to the default server, which
/// normally comes from the system resolver configuration.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    default_server: SocketAddr,
}

impl NetworkClient {
    pub fn new(default_server: SocketAddr) -> Self {
        Self { default_server }
    }

    fn target(&self, request: &QueryRequest) -> SocketAddr {
        request.server.unwrap_or(self.default_server)
    }
}

#[async_trait]
impl DnsClient for NetworkClient {
    async fn resolve(&self, request: &QueryRequest) -> Result<DecodedMessage, QueryError> {
        let server = self.target(request);
        let query = build_query(&request.hostname, request.record_type)?;
        let query_id = query.id();
        let bytes = query
            .to_vec()
            .map_err(|e| QueryError::Malformed(format!("failed to encode query: {e}")))?;

        let response_bytes =
            tokio::time::timeout(request.timeout, exchange(request.protocol, server, &bytes))
                .await
                .map_err(|_| QueryError::Timeout(request.timeout))??;

        let message = decode_response(&response_bytes)?;
        if message.id != query_id {
            return Err(QueryError::Malformed(format!(
                "response id {} does not match query id {query_id}",
                message.id
            )));
        }

        check_response(request.record_type, message)
    }

    fn server_label(&self, request: &QueryRequest) -> String {
        server_label(self.target(request))
    }
}

/// Formats a server address for the report: bare IP on port 53, `IP:port` otherwise.
pub fn server_label(server: SocketAddr) -> String {
    if server.port() == crate::config::DNS_PORT {
        server.ip().to_string()
    } else {
        server.to_string()
    }
}

/// Parses a hostname into a fully-qualified query name.
///
/// Non-ASCII names are converted to their IDNA form.
pub fn parse_query_name(hostname: &str) -> Result<Name, hickory_proto::error::ProtoError> {
    if hostname.ends_with('.') {
        Name::from_utf8(hostname)
    } else {
        Name::from_utf8(format!("{hostname}."))
    }
}

/// Builds a recursive EDNS0 query with a random id.
pub fn build_query(hostname: &str, record_type: RecordType) -> Result<Message, QueryError> {
    let name = parse_query_name(hostname)
        .map_err(|e| QueryError::Malformed(format!("invalid query name {hostname}: {e}")))?;

    let mut message = Message::new();
    message
        .set_id(rand::random::<u16>())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(name, record_type));

    let mut edns = Edns::new();
    edns.set_max_payload(MAX_UDP_PAYLOAD).set_version(0);
    message.set_edns(edns);

    Ok(message)
}

/// Classifies a decoded response by its response code and answer section.
///
/// - `NOERROR` with at least one record of the requested type (any record for `ANY`) is a success
/// - `NOERROR` without one is `NoAnswer`
/// - `NXDOMAIN` is `NxDomain`
/// - any other code is `ServerFailure`
pub fn check_response(
    record_type: RecordType,
    message: DecodedMessage,
) -> Result<DecodedMessage, QueryError> {
    match message.rcode() {
        0 => {
            let answered = message
                .answers
                .iter()
                .any(|rr| record_type == RecordType::ANY || rr.record_type == record_type);
            if answered {
                Ok(message)
            } else {
                Err(QueryError::NoAnswer)
            }
        }
        3 => Err(QueryError::NxDomain),
        code => Err(QueryError::ServerFailure(rcode_text(code))),
    }
}
