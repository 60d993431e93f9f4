//! Conversion from `hickory-proto` messages into [`DecodedMessage`].

use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::{RData, Record};

use crate::error_handling::QueryError;

use super::render::{
    EDNS_FLAG_DO, FLAG_AA, FLAG_AD, FLAG_CD, FLAG_QR, FLAG_RA, FLAG_RD, FLAG_TC,
};
use super::types::{DecodedMessage, EdnsInfo, ResourceRecord};

impl TryFrom<&Message> for DecodedMessage {
    type Error = QueryError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        let header = message.header();
        let mut flags = 0u16;
        for (set, bit) in [
            (header.message_type() == MessageType::Response, FLAG_QR),
            (header.authoritative(), FLAG_AA),
            (header.truncated(), FLAG_TC),
            (header.recursion_desired(), FLAG_RD),
            (header.recursion_available(), FLAG_RA),
            (header.authentic_data(), FLAG_AD),
            (header.checking_disabled(), FLAG_CD),
        ] {
            if set {
                flags |= bit;
            }
        }

        // hickory may already have merged the OPT high bits into the header code;
        // keep only the header nibble and take the high bits from the OPT record.
        #[allow(clippy::cast_possible_truncation)]
        let rcode_low = (u16::from(header.response_code()) & 0x000F) as u8;

        let edns = message.extensions().as_ref().map(|edns| EdnsInfo {
            version: edns.version(),
            rcode_high: edns.rcode_high(),
            flags: if edns.dnssec_ok() { EDNS_FLAG_DO } else { 0 },
            payload: edns.max_payload(),
        });

        let answers = message
            .answers()
            .iter()
            .map(ResourceRecord::from)
            .collect();

        Ok(DecodedMessage {
            id: header.id(),
            opcode: u8::from(header.op_code()),
            rcode_low,
            flags,
            edns,
            answers,
        })
    }
}

impl From<&Record> for ResourceRecord {
    fn from(record: &Record) -> Self {
        // Zero-length RDATA is legal (NULL, APL, unknown types); use the generic form.
        let values = match record.data() {
            Some(data) => rdata_values(data),
            None => vec![EMPTY_RDATA.to_string()],
        };

        ResourceRecord {
            record_type: record.record_type(),
            class: record.dns_class(),
            ttl: record.ttl(),
            values,
        }
    }
}

/// RFC 3597 generic rendering of empty record data.
pub const EMPTY_RDATA: &str = "\\# 0";

/// Renders record data to presentation strings.
///
/// TXT records can contain multiple strings; each becomes its own quoted value.
fn rdata_values(data: &RData) -> Vec<String> {
    match data {
        RData::TXT(txt) => txt.iter().map(|bytes| quote_character_string(bytes)).collect(),
        other => vec![other.to_string()],
    }
}

/// Quotes a character-string in zone-file form.
///
/// `"` and `\` are backslash-escaped; bytes outside printable ASCII become `\DDD`.
pub(super) fn quote_character_string(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() + 2);
    text.push('"');
    for &byte in bytes {
        match byte {
            b'"' | b'\\' => {
                text.push('\\');
                text.push(char::from(byte));
            }
            0x20..=0x7E => text.push(char::from(byte)),
            _ => text.push_str(&format!("\\{byte:03}")),
        }
    }
    text.push('"');
    text
}

/// Decodes a raw response into a [`DecodedMessage`].
pub fn decode_response(bytes: &[u8]) -> Result<DecodedMessage, QueryError> {
    let message =
        Message::from_vec(bytes).map_err(|e| QueryError::Malformed(e.to_string()))?;
    DecodedMessage::try_from(&message)
}
