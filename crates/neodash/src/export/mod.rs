//! Rendering decoded records for output.

mod format;
mod json;
mod tsv;

pub use format::ExportFormat;
pub use json::JsonExporter;
pub use tsv::TsvExporter;
