//! `gradtrack-core` — domain types for the outcomes roster.
//!
//! Pure types crate: students, the records imported for them from the
//! three external feeds, and the authoritative master record derived from
//! one of those feeds (or manual entry). No IO or CLI dependencies.

pub mod criteria;
pub mod master;
pub mod payload;
pub mod source;
pub mod student;

pub use criteria::{ExportFilter, FilterCriteria, SourceFilter};
pub use master::{MasterPatch, MasterRecord, SelectedSource};
pub use payload::Payload;
pub use source::{ClearingHouseRecord, LinkedInRecord, QualtricsRecord, SourceKind};
pub use student::Student;
