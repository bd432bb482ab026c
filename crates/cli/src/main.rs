// GradTrack CLI - headless outcomes-roster operations

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use gradtrack_cli::exit_codes::EXIT_SUCCESS;
use gradtrack_cli::export::cmd_export;
use gradtrack_cli::filters::{cmd_filters, FiltersCommands};
use gradtrack_cli::master::{cmd_master, MasterCommands};
use gradtrack_cli::students::{cmd_students, StudentsCommands};
use gradtrack_cli::CliError;

#[derive(Parser)]
#[command(name = "gradtrack")]
#[command(about = "Graduate outcomes roster - browse, reconcile, export")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and filter the student roster
    Students {
        #[command(subcommand)]
        command: StudentsCommands,
    },

    /// Populate and edit master records
    Master {
        #[command(subcommand)]
        command: MasterCommands,
    },

    /// Export the filtered roster as a CSV report
    #[command(after_help = "\
Fetches the full roster, applies the exact-match filters, and writes
GraduateSurvey_<major>_<school>_<term>_<date>.csv (or --out).

Examples:
  gradtrack export
  gradtrack export --major CMSC --term 202405
  gradtrack export --school ENGR --code-book codes.toml --out report.csv")]
    Export {
        /// Only this major code (exact match)
        #[arg(long)]
        major: Option<String>,

        /// Only this school code (exact match)
        #[arg(long)]
        school: Option<String>,

        /// Only this term (exact match)
        #[arg(long)]
        term: Option<String>,

        /// TOML file mapping major/school codes to display names
        #[arg(long, value_name = "FILE")]
        code_book: Option<PathBuf>,

        /// Output file (defaults to the derived report filename)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Suppress progress output
        #[arg(long, short = 'q')]
        quiet: bool,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },

    /// List distinct filter options (majors, schools, terms)
    Filters {
        #[command(subcommand)]
        command: FiltersCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Students { command } => cmd_students(command),
        Commands::Master { command } => cmd_master(command),
        Commands::Export {
            major,
            school,
            term,
            code_book,
            out,
            quiet,
            api_base,
        } => cmd_export(major, school, term, code_book, out, quiet, api_base),
        Commands::Filters { command } => cmd_filters(command),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}
