use gradtrack_core::{FilterCriteria, SourceFilter, Student};

use crate::store::Roster;

/// Apply dashboard criteria over the loaded roster.
///
/// Pure and deterministic: the result preserves roster order and every
/// element satisfies every clause. Entirely empty criteria match
/// NOTHING — the dashboard's home state is a prompt, not the full
/// roster.
pub fn apply<'r>(roster: &'r Roster, criteria: &FilterCriteria) -> Vec<&'r Student> {
    if criteria.is_empty() {
        return Vec::new();
    }
    roster
        .students()
        .iter()
        .filter(|student| matches(student, criteria))
        .collect()
}

/// True when a student satisfies every clause of the criteria.
pub fn matches(student: &Student, criteria: &FilterCriteria) -> bool {
    // UID is matched without case folding; it is numeric in practice.
    let matches_uid = criteria.uid.is_empty() || student.uid.contains(&criteria.uid);

    matches_uid
        && contains_fold(&student.name, &criteria.name)
        && contains_fold(&student.major, &criteria.major)
        && contains_fold(&student.school, &criteria.school)
        && contains_fold(&student.term, &criteria.term)
        && matches_sources(student, &criteria.sources)
}

/// Vacuous true for an empty needle, else case-insensitive substring.
fn contains_fold(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Source entries OR together: any selected feed with records matches,
/// and the no-source sentinel matches students with no records at all.
fn matches_sources(student: &Student, sources: &[SourceFilter]) -> bool {
    if sources.is_empty() {
        return true;
    }
    sources.iter().any(|selector| match selector {
        SourceFilter::Kind(kind) => student.has_records(*kind),
        SourceFilter::NoSource => !student.has_any_records(),
    })
}
