//! Outcomes API client — shared between roster, export, and CLI.
//!
//! This crate is the single source of truth for the backend wire
//! contract: the paged student listing, single-student fetch, master
//! record writes, and the filter-option endpoints.
//!
//! No GUI concepts. No automatic retries: a failed call surfaces to the
//! caller, which decides whether the user retries.

mod client;

pub use client::{ApiError, OutcomesClient, SaveReceipt, StudentQuery, StudentsPage};
