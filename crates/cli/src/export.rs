//! `gradtrack export` — write the filtered roster as a CSV report.

use std::path::{Path, PathBuf};

use gradtrack_api_client::{OutcomesClient, StudentQuery};
use gradtrack_config::Settings;
use gradtrack_core::ExportFilter;
use gradtrack_export::{export_filename, export_rows, filter_students, write_csv, CodeBook, ExportError};
use gradtrack_roster::{Pager, Roster};

use crate::util::{resolve_api_base, show_progress};
use crate::CliError;

#[allow(clippy::too_many_arguments)]
pub fn cmd_export(
    major: Option<String>,
    school: Option<String>,
    term: Option<String>,
    code_book: Option<PathBuf>,
    out: Option<PathBuf>,
    quiet: bool,
    api_base: Option<String>,
) -> Result<(), CliError> {
    let settings = Settings::load();
    let base = resolve_api_base(api_base, &settings)?;
    let client = OutcomesClient::new(base);
    let progress = show_progress(quiet);

    let filter = ExportFilter { major, school, term };
    let book = load_code_book(code_book, &settings)?;

    // The report covers the whole roster, filtered exactly; fetch every
    // page before projecting.
    if progress {
        eprintln!("Fetching students...");
    }
    let mut roster = Roster::new();
    let mut pager = Pager::new(StudentQuery::default(), settings.page_size);
    let loaded = pager
        .load_all(&client, &mut roster)
        .map_err(CliError::roster)?;
    if progress {
        eprintln!("  {loaded} students loaded");
    }

    let picked = filter_students(roster.students(), &filter);
    let rows = export_rows(&picked, &book);

    let path = match out {
        Some(path) => path,
        None => PathBuf::from(export_filename(
            &filter,
            chrono::Local::now().date_naive(),
        )),
    };

    let file = std::fs::File::create(&path).map_err(|e| {
        CliError::export(ExportError::Io(format!("cannot create {}: {e}", path.display())))
    })?;
    write_csv(&rows, file).map_err(CliError::export)?;

    if progress {
        eprintln!("Done: {} students written to {}", rows.len(), path.display());
    }
    Ok(())
}

fn load_code_book(flag: Option<PathBuf>, settings: &Settings) -> Result<CodeBook, CliError> {
    let path = flag.or_else(|| settings.code_book.as_ref().map(PathBuf::from));
    match path {
        Some(path) => CodeBook::load(Path::new(&path)).map_err(CliError::export),
        // No code book configured: raw codes pass through.
        None => Ok(CodeBook::default()),
    }
}
