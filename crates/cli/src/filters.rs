//! `gradtrack filters` — distinct values for the filter dropdowns.

use clap::Subcommand;

use gradtrack_api_client::OutcomesClient;
use gradtrack_config::Settings;

use crate::util::resolve_api_base;
use crate::CliError;

#[derive(Subcommand)]
pub enum FiltersCommands {
    /// Distinct majors
    Majors {
        /// Output as a JSON array
        #[arg(long)]
        json: bool,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },
    /// Distinct schools
    Schools {
        /// Output as a JSON array
        #[arg(long)]
        json: bool,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },
    /// Distinct terms
    Terms {
        /// Output as a JSON array
        #[arg(long)]
        json: bool,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },
}

pub fn cmd_filters(cmd: FiltersCommands) -> Result<(), CliError> {
    let (which, json, api_base) = match cmd {
        FiltersCommands::Majors { json, api_base } => ("majors", json, api_base),
        FiltersCommands::Schools { json, api_base } => ("schools", json, api_base),
        FiltersCommands::Terms { json, api_base } => ("terms", json, api_base),
    };

    let settings = Settings::load();
    let base = resolve_api_base(api_base, &settings)?;
    let client = OutcomesClient::new(base);

    let values = match which {
        "majors" => client.majors(),
        "schools" => client.schools(),
        _ => client.terms(),
    }
    .map_err(CliError::api)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".to_string()),
        );
    } else {
        for value in &values {
            println!("{value}");
        }
    }
    Ok(())
}
