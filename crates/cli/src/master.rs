//! `gradtrack master` — populate and edit master records.
//!
//! Every subcommand follows the same sequencing: fetch the student,
//! write through the API, and only then report the local record. A
//! failed write changes nothing.

use clap::Subcommand;

use gradtrack_api_client::{ApiError, OutcomesClient};
use gradtrack_config::Settings;
use gradtrack_core::{MasterRecord, SourceKind};
use gradtrack_recon::ManualEntry;
use gradtrack_roster::{commit, CommitOutcome, MasterEdit, Roster};

use crate::util::resolve_api_base;
use crate::CliError;

#[derive(Subcommand)]
pub enum MasterCommands {
    /// Populate the master record from a source feed
    #[command(after_help = "\
Selecting a feed REPLACES the student's master record with the mapped
fields. A feed with no records for the student leaves everything
unchanged.

Examples:
  gradtrack master select 117001234 qualtrics
  gradtrack master select 117001234 linkedin")]
    Select {
        /// Student UID
        uid: String,

        /// Feed to reconcile from: qualtrics, linkedin, or clearinghouse
        source: String,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },

    /// Enter a master record manually
    #[command(after_help = "\
All fields are optional and taken verbatim; omitted fields are stored
blank.

Examples:
  gradtrack master enter 117001234 --employment-status 'Employed Full-Time' --current-employer Acme
  gradtrack master enter 117005678 --current-activity education --enrollment-status enrolled")]
    Enter {
        /// Student UID
        uid: String,

        #[arg(long)]
        current_activity: Option<String>,

        #[arg(long)]
        employment_status: Option<String>,

        #[arg(long)]
        current_employer: Option<String>,

        #[arg(long)]
        current_position: Option<String>,

        #[arg(long)]
        enrollment_status: Option<String>,

        #[arg(long)]
        current_institution: Option<String>,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },

    /// Edit fields of an existing master record
    #[command(after_help = "\
Only the passed fields change; everything else keeps its value. The
last-updated timestamp always refreshes.

Examples:
  gradtrack master edit 117001234 --current-position 'Senior Engineer'
  gradtrack master edit 117001234 --enrollment-status '' ")]
    Edit {
        /// Student UID
        uid: String,

        #[arg(long)]
        current_activity: Option<String>,

        #[arg(long)]
        employment_status: Option<String>,

        #[arg(long)]
        current_employer: Option<String>,

        #[arg(long)]
        current_position: Option<String>,

        #[arg(long)]
        enrollment_status: Option<String>,

        #[arg(long)]
        current_institution: Option<String>,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },
}

pub fn cmd_master(cmd: MasterCommands) -> Result<(), CliError> {
    match cmd {
        MasterCommands::Select { uid, source, api_base } => cmd_select(&uid, &source, api_base),
        MasterCommands::Enter {
            uid,
            current_activity,
            employment_status,
            current_employer,
            current_position,
            enrollment_status,
            current_institution,
            api_base,
        } => {
            let entry = ManualEntry {
                current_activity: current_activity.unwrap_or_default(),
                employment_status: employment_status.unwrap_or_default(),
                current_employer: current_employer.unwrap_or_default(),
                current_position: current_position.unwrap_or_default(),
                enrollment_status: enrollment_status.unwrap_or_default(),
                current_institution: current_institution.unwrap_or_default(),
            };
            cmd_enter(&uid, &entry, api_base)
        }
        MasterCommands::Edit {
            uid,
            current_activity,
            employment_status,
            current_employer,
            current_position,
            enrollment_status,
            current_institution,
            api_base,
        } => {
            let edit = MasterEdit {
                current_activity,
                employment_status,
                current_employer,
                current_position,
                enrollment_status,
                current_institution,
            };
            cmd_edit(&uid, &edit, api_base)
        }
    }
}

pub fn cmd_select(uid: &str, source: &str, api_base: Option<String>) -> Result<(), CliError> {
    let kind: SourceKind = source.parse().map_err(|e: String| {
        CliError::args(format!("invalid source {source:?}: {e}"))
            .with_hint("valid values: qualtrics, linkedin, clearinghouse")
    })?;

    let (client, mut roster) = load_student(uid, api_base)?;

    match commit::select_source(&client, &mut roster, uid, kind).map_err(CliError::roster)? {
        CommitOutcome::Saved(record) => {
            println!("saved master record for {uid} from {kind}");
            print_record(&record);
        }
        CommitOutcome::NoData => {
            eprintln!("no {kind} records for {uid}; master record unchanged");
        }
    }
    Ok(())
}

pub fn cmd_enter(uid: &str, entry: &ManualEntry, api_base: Option<String>) -> Result<(), CliError> {
    let (client, mut roster) = load_student(uid, api_base)?;

    let record =
        commit::manual_entry(&client, &mut roster, uid, entry).map_err(CliError::roster)?;
    println!("saved manual master record for {uid}");
    print_record(&record);
    Ok(())
}

pub fn cmd_edit(uid: &str, edit: &MasterEdit, api_base: Option<String>) -> Result<(), CliError> {
    if edit.is_empty() {
        return Err(CliError::args("no fields to edit")
            .with_hint("pass at least one field flag, e.g. --current-position"));
    }

    let (client, mut roster) = load_student(uid, api_base)?;

    let record = commit::edit_master(&client, &mut roster, uid, edit).map_err(CliError::roster)?;
    println!("updated master record for {uid}");
    print_record(&record);
    Ok(())
}

/// Fetch the student into a fresh one-entry roster.
fn load_student(uid: &str, api_base: Option<String>) -> Result<(OutcomesClient, Roster), CliError> {
    let settings = Settings::load();
    let base = resolve_api_base(api_base, &settings)?;
    let client = OutcomesClient::new(base);

    let student = client.get_student(uid).map_err(|e| {
        let not_found = matches!(e, ApiError::Http(404, _));
        let err = CliError::api(e);
        if not_found {
            err.with_hint("no student with that UID; check `gradtrack students list`")
        } else {
            err
        }
    })?;

    let mut roster = Roster::new();
    roster.upsert(student);
    Ok((client, roster))
}

fn print_record(record: &MasterRecord) {
    let na = |v: &str| if v.is_empty() { "N/A".to_string() } else { v.to_string() };
    println!("  selected source:     {}", record.selected_source);
    println!("  current activity:    {}", na(&record.current_activity));
    println!("  employment status:   {}", na(&record.employment_status));
    println!("  current employer:    {}", na(&record.current_employer));
    println!("  current position:    {}", na(&record.current_position));
    println!("  enrollment status:   {}", na(&record.enrollment_status));
    println!("  current institution: {}", na(&record.current_institution));
    println!("  last updated:        {}", record.last_updated);
}
