//! DNS querying and response decoding.
//!
//! This module provides the resolver client used by the batch orchestrator:
//! - Query construction (recursive, EDNS0) and wire exchange over UDP or TCP
//! - Decoding of `hickory-proto` messages into [`DecodedMessage`]
//! - Classification of responses into answers and typed query errors
//! - Text rendering of opcodes, response codes, flags, types and classes

mod client;
mod decode;
pub mod render;
mod transport;
mod types;

// Re-export public API
pub use client::{
    build_query, check_response, parse_query_name, server_label, DnsClient, NetworkClient,
};
pub use decode::{decode_response, EMPTY_RDATA};
pub use types::{DecodedMessage, EdnsInfo, Protocol, QueryRequest, ResourceRecord};
