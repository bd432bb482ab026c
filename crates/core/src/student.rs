use serde::{Deserialize, Deserializer, Serialize};

use crate::master::MasterRecord;
use crate::source::{ClearingHouseRecord, LinkedInRecord, QualtricsRecord, SourceKind};

/// A student as returned by the outcomes API: demographics plus the
/// records imported for them from each feed, plus the master record if
/// one has been confirmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub uid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub term: String,
    // The API emits `null` rather than `[]` for students with no records
    // from a feed.
    #[serde(default, rename = "qualtrics_data", deserialize_with = "null_as_empty")]
    pub qualtrics: Vec<QualtricsRecord>,
    #[serde(default, rename = "linkedin_data", deserialize_with = "null_as_empty")]
    pub linkedin: Vec<LinkedInRecord>,
    #[serde(default, rename = "clearinghouse_data", deserialize_with = "null_as_empty")]
    pub clearinghouse: Vec<ClearingHouseRecord>,
    #[serde(default, rename = "master_data", skip_serializing_if = "Option::is_none")]
    pub master: Option<MasterRecord>,
}

fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}

impl Student {
    /// True when the student has at least one record from `kind`.
    pub fn has_records(&self, kind: SourceKind) -> bool {
        self.record_count(kind) > 0
    }

    pub fn record_count(&self, kind: SourceKind) -> usize {
        match kind {
            SourceKind::Qualtrics => self.qualtrics.len(),
            SourceKind::LinkedIn => self.linkedin.len(),
            SourceKind::ClearingHouse => self.clearinghouse.len(),
        }
    }

    /// True when any feed has at least one record for the student.
    pub fn has_any_records(&self) -> bool {
        SourceKind::ALL.iter().any(|kind| self.has_records(*kind))
    }

    pub fn in_master_db(&self) -> bool {
        self.master.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_api_shape() {
        // Mirrors the listing endpoint's per-student JSON, null arrays
        // included.
        let student: Student = serde_json::from_value(json!({
            "uid": "117001234",
            "name": "Jordan Lee",
            "email": "jlee@example.edu",
            "major": "CMSC",
            "school": "CMNS",
            "term": "202405",
            "qualtrics_data": [{
                "id": 11,
                "survey_id": "SV_abc",
                "response_id": "R_1",
                "recorded_at": "2024-06-01T12:00:00Z",
                "payload": {"Employment Status": "Employed Full-Time"},
                "source_file": "spring24.csv"
            }],
            "linkedin_data": null,
            "clearinghouse_data": null,
            "master_data": null
        }))
        .unwrap();

        assert_eq!(student.uid, "117001234");
        assert_eq!(student.record_count(SourceKind::Qualtrics), 1);
        assert!(!student.has_records(SourceKind::LinkedIn));
        assert!(!student.has_records(SourceKind::ClearingHouse));
        assert!(!student.in_master_db());
        assert!(student.has_any_records());
    }

    #[test]
    fn test_no_records_anywhere() {
        let student: Student = serde_json::from_value(json!({
            "uid": "117009999",
            "name": "Casey Ortiz",
            "major": "HIST",
            "school": "ARHU",
            "term": "202312"
        }))
        .unwrap();
        assert!(!student.has_any_records());
        assert_eq!(student.email, "");
    }
}
