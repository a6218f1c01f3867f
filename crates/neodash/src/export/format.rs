//! Row-oriented output formats for decoded records.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// A rendering of records of type `T`, one line per record
pub trait ExportFormat<T> {
    /// Header line, if the format has one
    fn header(&self) -> Option<String>;

    fn format_row(&self, record: &T) -> String;

    /// Header plus every record, newline-terminated
    fn format_rows(&self, records: &[T]) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for record in records {
            output.push_str(&self.format_row(record));
            output.push('\n');
        }
        output
    }

    /// Write formatted records to a file
    fn write_to<P: AsRef<Path>>(&self, path: P, records: &[T]) -> Result<()> {
        fs::write(&path, self.format_rows(records))?;
        info!(
            "Exported {} records to {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}
