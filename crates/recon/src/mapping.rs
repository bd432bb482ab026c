use gradtrack_core::{
    ClearingHouseRecord, LinkedInRecord, MasterPatch, QualtricsRecord, SelectedSource,
    SourceKind, Student,
};

/// Manually entered master-record fields, taken verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualEntry {
    pub current_activity: String,
    pub employment_status: String,
    pub current_employer: String,
    pub current_position: String,
    pub enrollment_status: String,
    pub current_institution: String,
}

/// Build the master-record patch for a chosen feed.
///
/// Uses the first record of that feed's array; the API does not promise
/// an ordering, so "first available" is the whole contract. Returns
/// `None` when the student has no records from the feed — callers treat
/// that as a no-op, never an error.
pub fn select_source(student: &Student, kind: SourceKind) -> Option<MasterPatch> {
    match kind {
        SourceKind::Qualtrics => student.qualtrics.first().map(from_qualtrics),
        SourceKind::LinkedIn => student.linkedin.first().map(from_linkedin),
        SourceKind::ClearingHouse => student.clearinghouse.first().map(from_clearinghouse),
    }
}

/// Build the patch for a manual entry. All six fields carry over
/// verbatim, blanks included.
pub fn manual_entry(entry: &ManualEntry) -> MasterPatch {
    MasterPatch {
        selected_source: SelectedSource::Manual,
        current_activity: Some(entry.current_activity.clone()),
        employment_status: Some(entry.employment_status.clone()),
        current_employer: Some(entry.current_employer.clone()),
        current_position: Some(entry.current_position.clone()),
        enrollment_status: Some(entry.enrollment_status.clone()),
        current_institution: Some(entry.current_institution.clone()),
    }
}

fn from_qualtrics(record: &QualtricsRecord) -> MasterPatch {
    let responses = &record.payload;

    let employment_status = responses.text("Employment Status");
    // Graduate-school respondents answer their own column set; fall back
    // to it where the employment columns are blank.
    let employer = responses.first_text(&["Company Name", "Graduate School"]);
    let position = responses.first_text(&["Job Title", "Degree Program"]);
    // Substring check is case-sensitive, matching the survey's fixed
    // answer wording.
    let enrollment_status = if employment_status.contains("Graduate") {
        "enrolled".to_string()
    } else {
        String::new()
    };

    MasterPatch {
        selected_source: SelectedSource::Qualtrics,
        current_activity: None,
        employment_status: Some(employment_status),
        current_employer: Some(employer),
        current_position: Some(position),
        enrollment_status: Some(enrollment_status),
        current_institution: Some(responses.text("Graduate School")),
    }
}

fn from_linkedin(record: &LinkedInRecord) -> MasterPatch {
    let payload = &record.payload;

    let mut patch = MasterPatch::new(SelectedSource::LinkedIn);
    // The network export only lists people holding a position; there is
    // no unemployment signal in this feed.
    patch.employment_status = Some("employed".to_string());
    patch.current_employer = Some(payload.text("company"));
    patch.current_position = Some(payload.text("title"));
    patch
}

fn from_clearinghouse(record: &ClearingHouseRecord) -> MasterPatch {
    let payload = &record.payload;

    let mut patch = MasterPatch::new(SelectedSource::ClearingHouse);
    // Enrollment feed says nothing about employment.
    patch.employment_status = Some(String::new());
    patch.enrollment_status = Some(payload.text("status"));
    patch.current_institution = Some(payload.text("institution"));
    patch
}
