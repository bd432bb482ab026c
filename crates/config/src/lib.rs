//! `gradtrack-config` — application settings.
//!
//! Loaded from `~/.config/gradtrack/settings.json`. A missing file means
//! defaults; a malformed file warns on stderr and falls back to defaults
//! rather than blocking the tool. `//` comment lines are tolerated.

mod settings;

pub use settings::Settings;
