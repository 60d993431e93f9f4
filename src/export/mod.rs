//! Result table export.
//!
//! The output file extension selects the format: `.csv` for a flat,
//! spreadsheet-ready table or `.jsonl` for one JSON object per row.

mod csv;
mod jsonl;
mod types;

use std::path::Path;

use log::info;

pub use csv::{export_csv, write_csv};
pub use jsonl::{export_jsonl, write_jsonl};
pub use types::ExportFormat;

use crate::error_handling::ExportError;
use crate::table::ResultTable;

/// Writes `table` to `output` in `format`.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns an `ExportError` if the file cannot be created or a row cannot be
/// serialized. The table itself is left untouched.
pub fn export_table(
    table: &ResultTable,
    output: &Path,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    let written = match format {
        ExportFormat::Csv => export_csv(table, output)?,
        ExportFormat::Jsonl => export_jsonl(table, output)?,
    };
    info!(
        "Exported {} rows ({} columns) to {}",
        written,
        table.header().len(),
        output.display()
    );
    Ok(written)
}
