use chrono::NaiveDate;

use gradtrack_core::ExportFilter;

/// Derive the report filename from the three filter selections and a
/// date: `GraduateSurvey_<major>_<school>_<term>_<date>.csv`.
///
/// Unselected filters read `AllMajors`/`AllSchools`/`AllTerms`; runs of
/// whitespace become a single underscore; school names are cut to their
/// leading 20 characters before normalization (they get long). The date
/// is a parameter so derivation stays deterministic.
pub fn export_filename(filter: &ExportFilter, date: NaiveDate) -> String {
    let major = match &filter.major {
        Some(major) => underscore_ws(major),
        None => "AllMajors".to_string(),
    };
    let school = match &filter.school {
        Some(school) => underscore_ws(&school.chars().take(20).collect::<String>()),
        None => "AllSchools".to_string(),
    };
    let term = match &filter.term {
        Some(term) => underscore_ws(term),
        None => "AllTerms".to_string(),
    };

    format!(
        "GraduateSurvey_{major}_{school}_{term}_{}.csv",
        date.format("%Y-%m-%d"),
    )
}

fn underscore_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_whitespace = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}
