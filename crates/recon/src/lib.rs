//! `gradtrack-recon` — source-to-master reconciliation engine.
//!
//! Pure engine crate: maps a student's imported records (or a manual
//! entry form) into master-record patches, and merges patches onto
//! existing records. No IO or HTTP dependencies; write ordering against
//! the API lives with the roster store.

pub mod mapping;
pub mod merge;

pub use mapping::{manual_entry, select_source, ManualEntry};
pub use merge::{materialize, merge};
