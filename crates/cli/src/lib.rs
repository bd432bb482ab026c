//! gradtrack CLI — headless outcomes-roster operations.
//!
//! Command modules follow one shape: a clap `Subcommand` enum plus
//! `cmd_*` entry points returning `Result<(), CliError>`. `main` owns
//! nothing but parsing and the exit-code mapping.

pub mod exit_codes;
pub mod export;
pub mod filters;
pub mod master;
pub mod students;
pub mod util;

use gradtrack_api_client::ApiError;
use gradtrack_export::ExportError;
use gradtrack_roster::RosterError;

use exit_codes::{
    EXIT_API_HTTP, EXIT_API_NETWORK, EXIT_API_PARSE, EXIT_CONFIG_CODE_BOOK, EXIT_EXPORT_CSV,
    EXIT_EXPORT_IO, EXIT_ROSTER_NO_MASTER, EXIT_ROSTER_PAGINATION, EXIT_ROSTER_UNKNOWN_STUDENT,
    EXIT_USAGE,
};

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: msg.into(),
            hint: None,
        }
    }

    /// Map an API transport error to its exit code.
    pub fn api(err: ApiError) -> Self {
        let (code, hint) = match &err {
            ApiError::Network(_) => (
                EXIT_API_NETWORK,
                Some("is the outcomes API running and reachable?".to_string()),
            ),
            ApiError::Http(..) => (EXIT_API_HTTP, None),
            ApiError::Parse(_) => (EXIT_API_PARSE, None),
        };
        Self {
            code,
            message: err.to_string(),
            hint,
        }
    }

    /// Map a roster error to its exit code.
    pub fn roster(err: RosterError) -> Self {
        match err {
            RosterError::Api(api) => Self::api(api),
            RosterError::UnknownStudent(_) => Self {
                code: EXIT_ROSTER_UNKNOWN_STUDENT,
                message: err.to_string(),
                hint: Some("check the UID against `gradtrack students list`".to_string()),
            },
            RosterError::NoMasterRecord(_) => Self {
                code: EXIT_ROSTER_NO_MASTER,
                message: err.to_string(),
                hint: Some(
                    "create one first with `gradtrack master select` or `gradtrack master enter`"
                        .to_string(),
                ),
            },
            RosterError::Pagination(_) => Self {
                code: EXIT_ROSTER_PAGINATION,
                message: err.to_string(),
                hint: None,
            },
        }
    }

    /// Map an export error to its exit code.
    pub fn export(err: ExportError) -> Self {
        let code = match &err {
            ExportError::CodeBook(_) => EXIT_CONFIG_CODE_BOOK,
            ExportError::Io(_) => EXIT_EXPORT_IO,
            ExportError::Csv(_) => EXIT_EXPORT_CSV,
        };
        Self {
            code,
            message: err.to_string(),
            hint: None,
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_codes() {
        assert_eq!(CliError::api(ApiError::Network("refused".into())).code, EXIT_API_NETWORK);
        assert_eq!(CliError::api(ApiError::Http(500, "boom".into())).code, EXIT_API_HTTP);
        assert_eq!(CliError::api(ApiError::Parse("eof".into())).code, EXIT_API_PARSE);
    }

    #[test]
    fn test_roster_error_codes() {
        assert_eq!(
            CliError::roster(RosterError::UnknownStudent("1".into())).code,
            EXIT_ROSTER_UNKNOWN_STUDENT,
        );
        assert_eq!(
            CliError::roster(RosterError::NoMasterRecord("1".into())).code,
            EXIT_ROSTER_NO_MASTER,
        );
        // Nested API errors keep the API mapping.
        assert_eq!(
            CliError::roster(RosterError::Api(ApiError::Http(404, String::new()))).code,
            EXIT_API_HTTP,
        );
    }

    #[test]
    fn test_export_error_codes() {
        assert_eq!(
            CliError::export(ExportError::CodeBook("bad".into())).code,
            EXIT_CONFIG_CODE_BOOK,
        );
        assert_eq!(CliError::export(ExportError::Io("denied".into())).code, EXIT_EXPORT_IO);
    }
}
