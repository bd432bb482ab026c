//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args)               |
//! | 10-19   | config           | Settings / code book codes               |
//! | 20-29   | api              | Outcomes API transport codes             |
//! | 30-39   | roster           | Roster / reconciliation codes            |
//! | 40-49   | export           | CSV report codes                         |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Config (10-19)
// =============================================================================

/// No API base URL available (flag, env var, and settings all empty).
pub const EXIT_CONFIG_NO_API_BASE: u8 = 10;

/// Code book file unreadable or not valid TOML.
pub const EXIT_CONFIG_CODE_BOOK: u8 = 11;

// =============================================================================
// API (20-29) — outcomes API transport
// =============================================================================

/// Network failure reaching the outcomes API (connect, timeout).
pub const EXIT_API_NETWORK: u8 = 20;

/// The API answered with a non-2xx status.
pub const EXIT_API_HTTP: u8 = 21;

/// The API answered 2xx but the body did not parse as expected.
pub const EXIT_API_PARSE: u8 = 22;

// =============================================================================
// Roster (30-39)
// =============================================================================

/// Referenced student is not in the loaded roster.
pub const EXIT_ROSTER_UNKNOWN_STUDENT: u8 = 30;

/// Edit requested for a student with no master record.
pub const EXIT_ROSTER_NO_MASTER: u8 = 31;

/// Paged listing misbehaved (has_more with an empty page).
pub const EXIT_ROSTER_PAGINATION: u8 = 32;

// =============================================================================
// Export (40-49)
// =============================================================================

/// Cannot create or write the output file.
pub const EXIT_EXPORT_IO: u8 = 40;

/// CSV serialization failed.
pub const EXIT_EXPORT_CSV: u8 = 41;
