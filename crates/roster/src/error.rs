use std::fmt;

use gradtrack_api_client::ApiError;

#[derive(Debug)]
pub enum RosterError {
    /// API call failed (fetch or write).
    Api(ApiError),
    /// Student not present in the loaded roster.
    UnknownStudent(String),
    /// Edit requested for a student with no master record.
    NoMasterRecord(String),
    /// Paged listing misbehaved (e.g. has_more with an empty page).
    Pagination(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(err) => err.fmt(f),
            Self::UnknownStudent(uid) => {
                write!(f, "student {uid} is not in the loaded roster")
            }
            Self::NoMasterRecord(uid) => {
                write!(f, "student {uid} has no master record to edit")
            }
            Self::Pagination(msg) => write!(f, "pagination error: {msg}"),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<ApiError> for RosterError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}
