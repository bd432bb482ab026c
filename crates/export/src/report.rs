use std::io::Write;

use serde::Serialize;

use gradtrack_core::{ExportFilter, SourceKind, Student};

use crate::codebook::CodeBook;
use crate::error::ExportError;

/// One flat report row per student. Column order is the serde field
/// order — the survey office's downstream sheets key off these exact
/// headers, so treat any change as a contract change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "Major")]
    pub major: String,
    #[serde(rename = "School")]
    pub school: String,
    #[serde(rename = "Term")]
    pub term: String,
    #[serde(rename = "Has Qualtrics Data")]
    pub has_qualtrics: String,
    #[serde(rename = "Has LinkedIn Data")]
    pub has_linkedin: String,
    #[serde(rename = "Has ClearingHouse Data")]
    pub has_clearinghouse: String,
    #[serde(rename = "In Master Database")]
    pub in_master_db: String,
    #[serde(rename = "Selected Source")]
    pub selected_source: String,
    #[serde(rename = "Current Activity")]
    pub current_activity: String,
    #[serde(rename = "Employment Status")]
    pub employment_status: String,
    #[serde(rename = "Current Employer")]
    pub current_employer: String,
    #[serde(rename = "Current Position")]
    pub current_position: String,
    #[serde(rename = "Enrollment Status")]
    pub enrollment_status: String,
    #[serde(rename = "Current Institution")]
    pub current_institution: String,
    #[serde(rename = "Last Updated")]
    pub last_updated: String,
}

/// Header row, in the same order as the serde fields above.
pub const HEADERS: [&str; 17] = [
    "Name",
    "UID",
    "Major",
    "School",
    "Term",
    "Has Qualtrics Data",
    "Has LinkedIn Data",
    "Has ClearingHouse Data",
    "In Master Database",
    "Selected Source",
    "Current Activity",
    "Employment Status",
    "Current Employer",
    "Current Position",
    "Enrollment Status",
    "Current Institution",
    "Last Updated",
];

/// Apply the export page's single-select filters (independent of the
/// dashboard criteria). Preserves input order.
pub fn filter_students<'a>(students: &'a [Student], filter: &ExportFilter) -> Vec<&'a Student> {
    students.iter().filter(|s| filter.matches(s)).collect()
}

/// Project students into report rows, resolving codes via the book.
pub fn export_rows(students: &[&Student], book: &CodeBook) -> Vec<ReportRow> {
    students.iter().map(|s| row_for(s, book)).collect()
}

fn row_for(student: &Student, book: &CodeBook) -> ReportRow {
    let master = student.master.as_ref();
    // Blank and absent both read "N/A": the feeds don't distinguish them.
    let master_field = |field: fn(&gradtrack_core::MasterRecord) -> &str| -> String {
        match master.map(field) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => "N/A".to_string(),
        }
    };

    ReportRow {
        name: student.name.clone(),
        uid: student.uid.clone(),
        major: book.major_name(&student.major).to_string(),
        school: book.school_name(&student.school).to_string(),
        term: student.term.clone(),
        has_qualtrics: yes_no(student.has_records(SourceKind::Qualtrics)),
        has_linkedin: yes_no(student.has_records(SourceKind::LinkedIn)),
        has_clearinghouse: yes_no(student.has_records(SourceKind::ClearingHouse)),
        in_master_db: yes_no(master.is_some()),
        selected_source: master
            .map(|m| m.selected_source.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        current_activity: master_field(|m| &m.current_activity),
        employment_status: master_field(|m| &m.employment_status),
        current_employer: master_field(|m| &m.current_employer),
        current_position: master_field(|m| &m.current_position),
        enrollment_status: master_field(|m| &m.enrollment_status),
        current_institution: master_field(|m| &m.current_institution),
        last_updated: master_field(|m| &m.last_updated),
    }
}

fn yes_no(present: bool) -> String {
    if present { "Yes" } else { "No" }.to_string()
}

/// Write rows as CSV (RFC 4180 quoting, `\n` terminator). The header is
/// always written, even with zero rows.
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    if rows.is_empty() {
        csv_writer
            .write_record(HEADERS)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student(value: serde_json::Value) -> Student {
        serde_json::from_value(value).unwrap()
    }

    fn jordan() -> Student {
        student(json!({
            "uid": "117001234",
            "name": "Lee, Jordan \"JJ\"",
            "major": "CMSC",
            "school": "CMNS",
            "term": "202405",
            "qualtrics_data": [{"id": 1, "payload": {"Employment Status": "Employed Full-Time"}}],
            "master_data": {
                "selected_source": "qualtrics",
                "employment_status": "Employed Full-Time",
                "current_employer": "Acme",
                "current_position": "Engineer",
                "enrollment_status": "",
                "current_institution": "",
                "last_updated": "2024-07-15T09:30:00Z"
            }
        }))
    }

    fn riley() -> Student {
        student(json!({
            "uid": "117005678",
            "name": "Riley Chen",
            "major": "HIST",
            "school": "ARHU",
            "term": "202312"
        }))
    }

    fn book() -> CodeBook {
        CodeBook::from_toml(
            r#"
[majors]
CMSC = "Computer Science"

[schools]
CMNS = "College of Computer, Mathematical, and Natural Sciences"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_row_projection() {
        let students = [jordan(), riley()];
        let refs: Vec<&Student> = students.iter().collect();
        let rows = export_rows(&refs, &book());

        assert_eq!(rows.len(), 2);
        let row = &rows[0];
        assert_eq!(row.major, "Computer Science");
        assert_eq!(
            row.school,
            "College of Computer, Mathematical, and Natural Sciences",
        );
        assert_eq!(row.has_qualtrics, "Yes");
        assert_eq!(row.has_linkedin, "No");
        assert_eq!(row.in_master_db, "Yes");
        assert_eq!(row.selected_source, "qualtrics");
        assert_eq!(row.employment_status, "Employed Full-Time");
        // Blank master fields also read N/A.
        assert_eq!(row.enrollment_status, "N/A");
        assert_eq!(row.current_activity, "N/A");
        assert_eq!(row.last_updated, "2024-07-15T09:30:00Z");
    }

    #[test]
    fn test_unmapped_codes_fall_back_raw() {
        let students = [riley()];
        let refs: Vec<&Student> = students.iter().collect();
        let rows = export_rows(&refs, &book());

        let row = &rows[0];
        assert_eq!(row.major, "HIST");
        assert_eq!(row.school, "ARHU");
        assert_eq!(row.in_master_db, "No");
        assert_eq!(row.selected_source, "N/A");
        assert_eq!(row.employment_status, "N/A");
    }

    #[test]
    fn test_filter_students_exact_single_selects() {
        let students = [jordan(), riley()];
        let all = filter_students(&students, &ExportFilter::default());
        assert_eq!(all.len(), 2);

        let filtered = filter_students(
            &students,
            &ExportFilter {
                major: Some("HIST".into()),
                ..Default::default()
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].uid, "117005678");
    }

    #[test]
    fn test_csv_round_trip_and_quoting() {
        let students = [jordan(), riley()];
        let refs: Vec<&Student> = students.iter().collect();
        let rows = export_rows(&refs, &book());

        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Embedded comma and quotes force RFC 4180 quoting with doubled
        // quotes.
        assert!(text.contains("\"Lee, Jordan \"\"JJ\"\"\""));

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers: Vec<String> =
            reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, HEADERS);

        let parsed: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(parsed.len(), rows.len());
        assert_eq!(&parsed[0][0], "Lee, Jordan \"JJ\"");
    }

    #[test]
    fn test_header_written_for_empty_roster() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Name,UID,Major,School,Term,"));
    }
}
