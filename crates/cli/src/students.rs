//! `gradtrack students` — browse and filter the roster.

use clap::Subcommand;

use gradtrack_api_client::{ApiError, OutcomesClient, StudentQuery};
use gradtrack_config::Settings;
use gradtrack_core::{FilterCriteria, SourceKind, Student};
use gradtrack_roster::{filter, LoadOutcome, Pager, Roster};

use crate::exit_codes::EXIT_ERROR;
use crate::util::{parse_sources, resolve_api_base, show_progress};
use crate::CliError;

#[derive(Subcommand)]
pub enum StudentsCommands {
    /// List students matching filters
    #[command(after_help = "\
The roster only renders once at least one filter is set — the same
policy as the dashboard's home state.

Examples:
  gradtrack students list --school Engineering
  gradtrack students list --name lee --term 202405 --all
  gradtrack students list --source none --major CMSC
  gradtrack students list --uid 11700 --json")]
    List {
        /// Filter by name (case-insensitive substring)
        #[arg(long)]
        name: Option<String>,

        /// Filter by UID substring (matched exactly as typed)
        #[arg(long)]
        uid: Option<String>,

        /// Filter by major code (case-insensitive substring)
        #[arg(long)]
        major: Option<String>,

        /// Filter by school (case-insensitive substring)
        #[arg(long)]
        school: Option<String>,

        /// Filter by term (case-insensitive substring)
        #[arg(long)]
        term: Option<String>,

        /// Keep students with records from this feed (repeatable).
        /// Values: qualtrics, linkedin, clearinghouse, none
        #[arg(long = "source", value_name = "SOURCE")]
        sources: Vec<String>,

        /// Pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Follow has_more until the listing is exhausted
        #[arg(long)]
        all: bool,

        /// Page size (defaults to the configured size)
        #[arg(long)]
        limit: Option<u32>,

        /// Output matching students as JSON
        #[arg(long)]
        json: bool,

        /// Suppress progress output
        #[arg(long, short = 'q')]
        quiet: bool,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },

    /// Show one student with their source records
    #[command(after_help = "\
Examples:
  gradtrack students show 117001234
  gradtrack students show 117001234 --json")]
    Show {
        /// Student UID
        uid: String,

        /// Output the raw student record as JSON
        #[arg(long)]
        json: bool,

        /// Outcomes API base URL
        #[arg(long, env = "GRADTRACK_API_BASE")]
        api_base: Option<String>,
    },
}

pub fn cmd_students(cmd: StudentsCommands) -> Result<(), CliError> {
    match cmd {
        StudentsCommands::List {
            name,
            uid,
            major,
            school,
            term,
            sources,
            pages,
            all,
            limit,
            json,
            quiet,
            api_base,
        } => cmd_list(
            name, uid, major, school, term, sources, pages, all, limit, json, quiet, api_base,
        ),
        StudentsCommands::Show { uid, json, api_base } => cmd_show(&uid, json, api_base),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_list(
    name: Option<String>,
    uid: Option<String>,
    major: Option<String>,
    school: Option<String>,
    term: Option<String>,
    sources: Vec<String>,
    pages: u32,
    all: bool,
    limit: Option<u32>,
    json: bool,
    quiet: bool,
    api_base: Option<String>,
) -> Result<(), CliError> {
    let criteria = FilterCriteria {
        name: name.unwrap_or_default(),
        uid: uid.unwrap_or_default(),
        major: major.unwrap_or_default(),
        school: school.unwrap_or_default(),
        term: term.unwrap_or_default(),
        sources: parse_sources(&sources)?,
    };

    // Home-state policy: an unfiltered roster renders nothing.
    if criteria.is_empty() {
        if json {
            println!("[]");
        }
        eprintln!("no filters set; the roster only renders once you filter");
        eprintln!("hint:  try --name, --uid, --major, --school, --term, or --source");
        return Ok(());
    }

    let settings = Settings::load();
    let base = resolve_api_base(api_base, &settings)?;
    let client = OutcomesClient::new(base);
    let page_size = limit.unwrap_or(settings.page_size);

    // Name/major/school/term narrow server-side too; UID and source
    // filters only exist client-side.
    let query = StudentQuery {
        name: none_if_empty(&criteria.name),
        major: none_if_empty(&criteria.major),
        school: none_if_empty(&criteria.school),
        term: none_if_empty(&criteria.term),
        ..Default::default()
    };

    let mut roster = Roster::new();
    let mut pager = Pager::new(query, page_size);
    let progress = show_progress(quiet);

    pager
        .initial_load(&client, &mut roster)
        .map_err(CliError::roster)?;
    if progress {
        eprintln!("  page 1: {} students", roster.len());
    }

    let mut page_no = 1u32;
    while (all || page_no < pages) && pager.has_more() {
        match pager.load_more(&client, &mut roster).map_err(CliError::roster)? {
            LoadOutcome::Loaded(count) => {
                page_no += 1;
                if progress {
                    eprintln!("  page {}: {} students", page_no, count);
                }
                if count == 0 {
                    // has_more with an empty page: stop rather than spin.
                    break;
                }
            }
            LoadOutcome::Noop => break,
        }
    }

    let matched = filter::apply(&roster, &criteria);

    if json {
        println!("{}", to_json(&matched)?);
    } else {
        for student in &matched {
            println!("{}", render_line(student));
        }
    }

    if progress {
        let in_master = matched.iter().filter(|s| s.in_master_db()).count();
        eprintln!(
            "{} matched of {} loaded ({} on server); {} in master DB",
            matched.len(),
            roster.len(),
            pager.total(),
            in_master,
        );
        if pager.has_more() {
            eprintln!("more pages available; pass --all or --pages N");
        }
    }

    Ok(())
}

pub fn cmd_show(uid: &str, json: bool, api_base: Option<String>) -> Result<(), CliError> {
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

    if json {
        println!("{}", to_json(&student)?);
        return Ok(());
    }

    print_student(&student);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("cannot serialize output: {e}"),
        hint: None,
    })
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ── Rendering ───────────────────────────────────────────────────────

fn source_flags(student: &Student) -> String {
    let flag = |kind: SourceKind, c: char| {
        if student.has_records(kind) {
            c
        } else {
            '-'
        }
    };
    format!(
        "{}{}{}",
        flag(SourceKind::Qualtrics, 'Q'),
        flag(SourceKind::LinkedIn, 'L'),
        flag(SourceKind::ClearingHouse, 'C'),
    )
}

fn render_line(student: &Student) -> String {
    let master = student
        .master
        .as_ref()
        .map(|m| format!("  master:{}", m.selected_source))
        .unwrap_or_default();
    format!(
        "{:<10}  {:<24}  {:<6}  {:<6}  {:<6}  [{}]{}",
        student.uid,
        student.name,
        student.major,
        student.school,
        student.term,
        source_flags(student),
        master,
    )
}

fn na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn print_student(student: &Student) {
    println!("{} ({})", student.name, student.uid);
    println!("  major:   {}", na(&student.major));
    println!("  school:  {}", na(&student.school));
    println!("  term:    {}", na(&student.term));
    if !student.email.is_empty() {
        println!("  email:   {}", student.email);
    }

    for (i, rec) in student.qualtrics.iter().enumerate() {
        println!(
            "  Qualtrics #{}: Survey ID: {} (recorded {})",
            i + 1,
            na(&rec.survey_id),
            na(&rec.recorded_at),
        );
    }
    for (i, rec) in student.linkedin.iter().enumerate() {
        println!(
            "  LinkedIn #{}: URL: {} (source {})",
            i + 1,
            na(&linkedin_summary(rec)),
            na(&rec.source_file),
        );
    }
    for (i, rec) in student.clearinghouse.iter().enumerate() {
        println!(
            "  ClearingHouse #{}: {} (source {})",
            i + 1,
            clearinghouse_summary(rec),
            na(&rec.source_file),
        );
    }
    if !student.has_any_records() {
        println!("  no source records");
    }

    match &student.master {
        Some(m) => {
            println!("  master record ({}, updated {}):", m.selected_source, na(&m.last_updated));
            println!("    current activity:    {}", na(&m.current_activity));
            println!("    employment status:   {}", na(&m.employment_status));
            println!("    current employer:    {}", na(&m.current_employer));
            println!("    current position:    {}", na(&m.current_position));
            println!("    enrollment status:   {}", na(&m.enrollment_status));
            println!("    current institution: {}", na(&m.current_institution));
        }
        None => println!("  no master record"),
    }
}

/// Profile URL out of whichever spelling this export batch used.
fn linkedin_summary(rec: &gradtrack_core::LinkedInRecord) -> String {
    rec.payload
        .first_text(&["linkedin_url", "url", "profile_url"])
}

/// College/major out of whichever spellings this feed batch used.
fn clearinghouse_summary(rec: &gradtrack_core::ClearingHouseRecord) -> String {
    let college = rec.payload.first_text(&[
        "College Name",
        "college_name",
        "institution",
        "school",
    ]);
    let major = rec.payload.first_text(&[
        "Enrollment Major 1",
        "enrollment_major_1",
        "major",
        "program",
        "degree_major",
    ]);

    let mut parts = Vec::new();
    if !college.is_empty() {
        parts.push(format!("College Name: {college}"));
    }
    if !major.is_empty() {
        parts.push(format!("Enrollment Major 1: {major}"));
    }

    if parts.is_empty() {
        "N/A".to_string()
    } else {
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student(value: serde_json::Value) -> Student {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_source_flags() {
        let s = student(json!({
            "uid": "1",
            "name": "x",
            "qualtrics_data": [{"id": 1, "payload": {}}],
            "clearinghouse_data": [{"id": 2, "payload": {}}]
        }));
        assert_eq!(source_flags(&s), "Q-C");
    }

    #[test]
    fn test_render_line_with_master() {
        let s = student(json!({
            "uid": "117001234",
            "name": "Jordan Lee",
            "major": "CMSC",
            "school": "CMNS",
            "term": "202405",
            "linkedin_data": [{"id": 1, "payload": {}}],
            "master_data": {"selected_source": "linkedin"}
        }));
        let line = render_line(&s);
        assert!(line.starts_with("117001234"));
        assert!(line.contains("[-L-]"));
        assert!(line.ends_with("master:linkedin"));
    }

    #[test]
    fn test_linkedin_summary_probes_spellings() {
        let rec: gradtrack_core::LinkedInRecord = serde_json::from_value(json!({
            "id": 1,
            "payload": {"profile_url": "https://www.linkedin.com/in/x"}
        }))
        .unwrap();
        assert_eq!(linkedin_summary(&rec), "https://www.linkedin.com/in/x");
    }

    #[test]
    fn test_clearinghouse_summary() {
        let rec: gradtrack_core::ClearingHouseRecord = serde_json::from_value(json!({
            "id": 1,
            "payload": {"college_name": "State University", "program": "History"}
        }))
        .unwrap();
        assert_eq!(
            clearinghouse_summary(&rec),
            "College Name: State University | Enrollment Major 1: History",
        );

        let empty: gradtrack_core::ClearingHouseRecord =
            serde_json::from_value(json!({"id": 2, "payload": {}})).unwrap();
        assert_eq!(clearinghouse_summary(&empty), "N/A");
    }
}
