//! CSV export.
//!
//! The header is the union of row keys in first-seen order; a row without a
//! given key gets an empty cell there.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::error_handling::ExportError;
use crate::table::ResultTable;

/// Writes `table` as CSV to `output`, replacing any existing file.
///
/// Returns the number of data rows written.
pub fn export_csv(table: &ResultTable, output: &Path) -> Result<usize, ExportError> {
    let file = std::fs::File::create(output)?;
    write_csv(table, file)
}

/// Writes `table` as CSV to any writer.
pub fn write_csv<W: Write>(table: &ResultTable, writer: W) -> Result<usize, ExportError> {
    let mut writer = Writer::from_writer(writer);
    let header = table.header();
    if header.is_empty() {
        return Ok(0);
    }
    writer.write_record(&header)?;

    let mut record_count = 0;
    for row in table.rows() {
        let record: Vec<String> = header
            .iter()
            .map(|key| row.get(key).map(ToString::to_string).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
        record_count += 1;
    }

    writer.flush()?;
    Ok(record_count)
}
