//! Export format selection.

use std::path::Path;

use crate::error_handling::ConfigError;

/// Table output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV (one header row, then one line per query; opens in any spreadsheet)
    Csv,
    /// JSONL (one JSON object per query, keys in row order)
    Jsonl,
}

impl ExportFormat {
    /// Picks the format from the output file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOutputExtension` for anything but `.csv` or `.jsonl`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(ExportFormat::Csv),
            Some("jsonl") => Ok(ExportFormat::Jsonl),
            _ => Err(ConfigError::InvalidOutputExtension(path.to_path_buf())),
        }
    }
}
