use chrono::Utc;

use gradtrack_api_client::OutcomesClient;
use gradtrack_core::{MasterPatch, MasterRecord, SourceKind};
use gradtrack_recon::{self as recon, ManualEntry};

use crate::error::RosterError;
use crate::store::Roster;

/// Outcome of a source selection.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The write succeeded and the roster was updated.
    Saved(MasterRecord),
    /// The chosen feed had no records for the student: no write was
    /// issued and the student is unchanged.
    NoData,
}

/// Field edits against an existing master record. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterEdit {
    pub current_activity: Option<String>,
    pub employment_status: Option<String>,
    pub current_employer: Option<String>,
    pub current_position: Option<String>,
    pub enrollment_status: Option<String>,
    pub current_institution: Option<String>,
}

impl MasterEdit {
    pub fn is_empty(&self) -> bool {
        self.current_activity.is_none()
            && self.employment_status.is_none()
            && self.current_employer.is_none()
            && self.current_position.is_none()
            && self.enrollment_status.is_none()
            && self.current_institution.is_none()
    }
}

/// Select a feed into the student's master record.
///
/// Ordering contract: the API write completes first; the roster only
/// changes after a 2xx. A feed with no records is a quiet no-op.
pub fn select_source(
    client: &OutcomesClient,
    roster: &mut Roster,
    uid: &str,
    kind: SourceKind,
) -> Result<CommitOutcome, RosterError> {
    let student = roster
        .get(uid)
        .ok_or_else(|| RosterError::UnknownStudent(uid.to_string()))?;

    let Some(patch) = recon::select_source(student, kind) else {
        return Ok(CommitOutcome::NoData);
    };

    let record = commit_replace(client, roster, uid, &patch)?;
    Ok(CommitOutcome::Saved(record))
}

/// Write a manually entered master record.
pub fn manual_entry(
    client: &OutcomesClient,
    roster: &mut Roster,
    uid: &str,
    entry: &ManualEntry,
) -> Result<MasterRecord, RosterError> {
    if roster.get(uid).is_none() {
        return Err(RosterError::UnknownStudent(uid.to_string()));
    }
    let patch = recon::manual_entry(entry);
    commit_replace(client, roster, uid, &patch)
}

/// Edit an existing master record: merge the changed fields, write the
/// merged record, then update the roster.
pub fn edit_master(
    client: &OutcomesClient,
    roster: &mut Roster,
    uid: &str,
    edit: &MasterEdit,
) -> Result<MasterRecord, RosterError> {
    let existing = roster
        .get(uid)
        .ok_or_else(|| RosterError::UnknownStudent(uid.to_string()))?
        .master
        .clone()
        .ok_or_else(|| RosterError::NoMasterRecord(uid.to_string()))?;

    let patch = MasterPatch {
        selected_source: existing.selected_source,
        current_activity: edit.current_activity.clone(),
        employment_status: edit.employment_status.clone(),
        current_employer: edit.current_employer.clone(),
        current_position: edit.current_position.clone(),
        enrollment_status: edit.enrollment_status.clone(),
        current_institution: edit.current_institution.clone(),
    };

    let now = Utc::now().to_rfc3339();
    let merged = recon::merge(&existing, &patch, &now);

    // POST the full merged record: the backend replaces the row, so a
    // partial body would blank the untouched fields.
    client.save_master(uid, &full_patch(&merged))?;
    roster.set_master(uid, merged.clone());
    Ok(merged)
}

fn commit_replace(
    client: &OutcomesClient,
    roster: &mut Roster,
    uid: &str,
    patch: &MasterPatch,
) -> Result<MasterRecord, RosterError> {
    let now = Utc::now().to_rfc3339();

    // Remote write first; a failure here must leave the roster alone.
    client.save_master(uid, patch)?;

    let record = recon::materialize(patch, &now);
    roster.set_master(uid, record.clone());
    Ok(record)
}

fn full_patch(record: &MasterRecord) -> MasterPatch {
    MasterPatch {
        selected_source: record.selected_source,
        current_activity: Some(record.current_activity.clone()),
        employment_status: Some(record.employment_status.clone()),
        current_employer: Some(record.current_employer.clone()),
        current_position: Some(record.current_position.clone()),
        enrollment_status: Some(record.enrollment_status.clone()),
        current_institution: Some(record.current_institution.clone()),
    }
}
