//! `gradtrack-export` — CSV report export.
//!
//! Pure projection + serialization: takes the filtered roster, resolves
//! major/school codes to display names, and writes the fixed-column
//! report the survey office distributes. No network effects.

pub mod codebook;
pub mod error;
pub mod filename;
pub mod report;

pub use codebook::CodeBook;
pub use error::ExportError;
pub use filename::export_filename;
pub use report::{export_rows, filter_students, write_csv, ReportRow};
