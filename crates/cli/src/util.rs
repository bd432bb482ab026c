//! Shared command plumbing: API base resolution, filter parsing,
//! progress gating.

use gradtrack_config::Settings;
use gradtrack_core::SourceFilter;

use crate::exit_codes::EXIT_CONFIG_NO_API_BASE;
use crate::CliError;

/// Resolve the outcomes API base URL: flag (or env, via clap) >
/// settings file > error with a hint.
pub fn resolve_api_base(flag: Option<String>, settings: &Settings) -> Result<String, CliError> {
    if let Some(base) = flag {
        let trimmed = base.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    if !settings.api_base.is_empty() {
        return Ok(settings.api_base.clone());
    }

    Err(CliError {
        code: EXIT_CONFIG_NO_API_BASE,
        message: "missing outcomes API base URL".into(),
        hint: Some(format!(
            "pass --api-base, set GRADTRACK_API_BASE, or set \"api.baseUrl\" in {}",
            Settings::config_path_display(),
        )),
    })
}

/// Parse repeated `--source` values into filter selectors.
pub fn parse_sources(raw: &[String]) -> Result<Vec<SourceFilter>, CliError> {
    raw.iter()
        .map(|s| {
            s.parse::<SourceFilter>().map_err(|e| {
                CliError::args(format!("invalid --source {s:?}: {e}"))
                    .with_hint("valid values: qualtrics, linkedin, clearinghouse, none")
            })
        })
        .collect()
}

/// Progress messages go to stderr, and only when it is a terminal and
/// the user did not pass --quiet.
pub fn show_progress(quiet: bool) -> bool {
    !quiet && atty::is(atty::Stream::Stderr)
}
