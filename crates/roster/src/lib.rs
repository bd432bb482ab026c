//! `gradtrack-roster` — in-memory roster state.
//!
//! Owns the loaded students (single-writer container), evaluates the
//! dashboard filters over them, pages the remote listing, and sequences
//! reconciliation commits: the API write completes first, local state
//! updates only after a 2xx.

pub mod commit;
pub mod error;
pub mod filter;
pub mod pager;
pub mod store;

pub use commit::{edit_master, manual_entry, select_source, CommitOutcome, MasterEdit};
pub use error::RosterError;
pub use pager::{LoadOutcome, Pager};
pub use store::Roster;
