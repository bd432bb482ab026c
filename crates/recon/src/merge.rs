use gradtrack_core::{MasterPatch, MasterRecord};

/// Materialize a patch into a fresh master record.
///
/// Source selection and manual entry REPLACE whatever record was there
/// before; fields the patch does not carry come out empty.
pub fn materialize(patch: &MasterPatch, last_updated: &str) -> MasterRecord {
    MasterRecord {
        selected_source: patch.selected_source,
        current_activity: patch.current_activity.clone().unwrap_or_default(),
        employment_status: patch.employment_status.clone().unwrap_or_default(),
        current_employer: patch.current_employer.clone().unwrap_or_default(),
        current_position: patch.current_position.clone().unwrap_or_default(),
        enrollment_status: patch.enrollment_status.clone().unwrap_or_default(),
        current_institution: patch.current_institution.clone().unwrap_or_default(),
        last_updated: last_updated.to_string(),
    }
}

/// Shallow-merge a partial patch onto an existing record (the edit
/// flow): present fields overwrite, absent fields keep their value, and
/// `last_updated` always refreshes.
pub fn merge(existing: &MasterRecord, patch: &MasterPatch, last_updated: &str) -> MasterRecord {
    let keep = |new: &Option<String>, old: &str| {
        new.clone().unwrap_or_else(|| old.to_string())
    };

    MasterRecord {
        selected_source: patch.selected_source,
        current_activity: keep(&patch.current_activity, &existing.current_activity),
        employment_status: keep(&patch.employment_status, &existing.employment_status),
        current_employer: keep(&patch.current_employer, &existing.current_employer),
        current_position: keep(&patch.current_position, &existing.current_position),
        enrollment_status: keep(&patch.enrollment_status, &existing.enrollment_status),
        current_institution: keep(&patch.current_institution, &existing.current_institution),
        last_updated: last_updated.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradtrack_core::SelectedSource;

    fn existing() -> MasterRecord {
        MasterRecord {
            selected_source: SelectedSource::Qualtrics,
            current_activity: "working".into(),
            employment_status: "Employed Full-Time".into(),
            current_employer: "Acme".into(),
            current_position: "Engineer".into(),
            enrollment_status: String::new(),
            current_institution: String::new(),
            last_updated: "2024-06-01T12:00:00Z".into(),
        }
    }

    #[test]
    fn test_materialize_drops_uncarried_fields() {
        let mut patch = MasterPatch::new(SelectedSource::LinkedIn);
        patch.employment_status = Some("employed".into());
        patch.current_employer = Some("Initech".into());

        let record = materialize(&patch, "2024-07-01T00:00:00Z");
        assert_eq!(record.selected_source, SelectedSource::LinkedIn);
        assert_eq!(record.current_employer, "Initech");
        // Replacement semantics: nothing survives from a previous record.
        assert_eq!(record.current_position, "");
        assert_eq!(record.current_activity, "");
        assert_eq!(record.last_updated, "2024-07-01T00:00:00Z");
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut patch = MasterPatch::new(SelectedSource::Qualtrics);
        patch.current_position = Some("Senior Engineer".into());

        let merged = merge(&existing(), &patch, "2024-08-01T00:00:00Z");
        assert_eq!(merged.current_position, "Senior Engineer");
        assert_eq!(merged.current_employer, "Acme");
        assert_eq!(merged.employment_status, "Employed Full-Time");
        assert_eq!(merged.current_activity, "working");
        assert_eq!(merged.last_updated, "2024-08-01T00:00:00Z");
    }

    #[test]
    fn test_merge_overwrites_with_blank() {
        // An explicitly blank field is an overwrite, not a keep.
        let mut patch = MasterPatch::new(SelectedSource::Qualtrics);
        patch.current_employer = Some(String::new());

        let merged = merge(&existing(), &patch, "2024-08-01T00:00:00Z");
        assert_eq!(merged.current_employer, "");
    }

    #[test]
    fn test_merge_always_refreshes_timestamp() {
        let patch = MasterPatch::new(SelectedSource::Qualtrics);
        let merged = merge(&existing(), &patch, "2025-01-01T00:00:00Z");
        assert_eq!(merged.last_updated, "2025-01-01T00:00:00Z");
        // Everything else untouched by an empty patch.
        assert_eq!(merged.current_employer, existing().current_employer);
    }
}
