//! Response flattening.
//!
//! Turns one [`DecodedMessage`] into the header and answer columns of a row.
//! Column names are derived from the answer section, so the schema depends on
//! the response:
//!
//! | columns | source |
//! |---------|--------|
//! | `id`, `opcode`, `rcode`, `flags`, `edns`, `eflags`, `payload` | header and OPT record |
//! | `TYPE-n`, `TYPE-classn`, `TYPE-ttln` | n-th record of `TYPE`, in answer order |
//! | `TYPE records` | per-type totals, roster types and CNAME first |

mod counter;

pub use counter::RecordCounter;

use crate::dns::render::{
    class_text, edns_flags_text, flags_text, opcode_text, rcode_text, record_type_text,
};
use crate::dns::DecodedMessage;
use crate::roster::RecordRoster;
use crate::table::Row;

/// Separator between the values of a multi-value record (e.g. TXT strings).
pub const VALUE_SEPARATOR: &str = "; ";

/// Flattens a decoded response into header, answer and count columns.
///
/// Types in `roster` (and CNAME) always get a `TYPE records` column, zero when
/// the answer carries none of them.
pub fn flatten(message: &DecodedMessage, roster: &RecordRoster) -> Row {
    let mut row = Row::new();
    row.set("id", message.id);
    row.set("opcode", opcode_text(message.opcode));
    row.set("rcode", rcode_text(message.rcode()));
    row.set("flags", flags_text(message.flags));
    row.set("edns", message.edns.map_or(-1, |edns| i64::from(edns.version)));
    row.set(
        "eflags",
        message
            .edns
            .map_or_else(String::new, |edns| edns_flags_text(edns.flags)),
    );
    row.set("payload", message.edns.map_or(0, |edns| edns.payload));

    let mut counter = RecordCounter::seeded(roster);
    for record in &message.answers {
        let type_name = record_type_text(record.record_type);
        let n = counter.increment(record.record_type);
        row.set(
            format!("{type_name}-{n}"),
            record.values.join(VALUE_SEPARATOR),
        );
        row.set(format!("{type_name}-class{n}"), class_text(record.class));
        row.set(format!("{type_name}-ttl{n}"), record.ttl);
    }

    for (record_type, count) in counter.iter() {
        row.set(format!("{} records", record_type_text(record_type)), count);
    }

    row
}
