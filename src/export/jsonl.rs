//! JSONL export.
//!
//! Each line is one row serialized as a JSON object with keys in row order.
//! Keys a row does not have are omitted rather than written as null.

use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error_handling::ExportError;
use crate::table::ResultTable;

/// Writes `table` as JSON Lines to `output`, replacing any existing file.
///
/// Returns the number of rows written.
pub fn export_jsonl(table: &ResultTable, output: &Path) -> Result<usize, ExportError> {
    let file = std::fs::File::create(output)?;
    write_jsonl(table, BufWriter::new(file))
}

/// Writes `table` as JSON Lines to any writer.
pub fn write_jsonl<W: Write>(table: &ResultTable, mut writer: W) -> Result<usize, ExportError> {
    let mut record_count = 0;
    for row in table.rows() {
        serde_json::to_writer(&mut writer, row)?;
        writeln!(writer)?;
        record_count += 1;
    }
    writer.flush()?;
    Ok(record_count)
}
