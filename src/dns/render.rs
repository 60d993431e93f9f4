//! Text rendering of DNS header fields, record types and classes.
//!
//! Mnemonics follow the conventional presentation names (`QUERY`, `NOERROR`,
//! `QR RD RA`, `DO`) so exported tables read like `dig` output.

use hickory_proto::rr::{DNSClass, RecordType};

pub const FLAG_QR: u16 = 0x8000;
pub const FLAG_AA: u16 = 0x0400;
pub const FLAG_TC: u16 = 0x0200;
pub const FLAG_RD: u16 = 0x0100;
pub const FLAG_RA: u16 = 0x0080;
pub const FLAG_AD: u16 = 0x0020;
pub const FLAG_CD: u16 = 0x0010;

/// DNSSEC OK bit of the EDNS flags.
pub const EDNS_FLAG_DO: u16 = 0x8000;

const HEADER_FLAGS: [(u16, &str); 7] = [
    (FLAG_QR, "QR"),
    (FLAG_AA, "AA"),
    (FLAG_TC, "TC"),
    (FLAG_RD, "RD"),
    (FLAG_RA, "RA"),
    (FLAG_AD, "AD"),
    (FLAG_CD, "CD"),
];

/// Renders an opcode, falling back to the decimal value.
pub fn opcode_text(opcode: u8) -> String {
    match opcode {
        0 => "QUERY".to_string(),
        1 => "IQUERY".to_string(),
        2 => "STATUS".to_string(),
        4 => "NOTIFY".to_string(),
        5 => "UPDATE".to_string(),
        other => other.to_string(),
    }
}

/// Renders a (possibly extended) response code, falling back to the decimal value.
pub fn rcode_text(rcode: u16) -> String {
    let name = match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADVERS",
        17 => "BADKEY",
        18 => "BADTIME",
        19 => "BADMODE",
        20 => "BADNAME",
        21 => "BADALG",
        22 => "BADTRUNC",
        23 => "BADCOOKIE",
        other => return other.to_string(),
    };
    name.to_string()
}

/// Renders header flags as space-separated tokens in wire order.
pub fn flags_text(flags: u16) -> String {
    HEADER_FLAGS
        .iter()
        .filter(|(bit, _)| flags & bit != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders EDNS flags. Only `DO` has a mnemonic.
pub fn edns_flags_text(flags: u16) -> String {
    if flags & EDNS_FLAG_DO != 0 {
        "DO".to_string()
    } else {
        String::new()
    }
}

/// Renders a record type, using `TYPE<code>` for types without a mnemonic.
pub fn record_type_text(record_type: RecordType) -> String {
    match record_type {
        RecordType::Unknown(code) => format!("TYPE{code}"),
        other => other.to_string(),
    }
}

/// Renders a record class, using `CLASS<code>` for classes without a mnemonic.
pub fn class_text(class: DNSClass) -> String {
    match class {
        DNSClass::IN => "IN".to_string(),
        DNSClass::CH => "CH".to_string(),
        DNSClass::HS => "HS".to_string(),
        DNSClass::NONE => "NONE".to_string(),
        DNSClass::ANY => "ANY".to_string(),
        other => format!("CLASS{}", u16::from(other)),
    }
}
