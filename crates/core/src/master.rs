use std::fmt;

use serde::{Deserialize, Serialize};

use crate::source::SourceKind;

/// How a master record was last populated: one of the three feeds, or
/// manual entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectedSource {
    Qualtrics,
    LinkedIn,
    ClearingHouse,
    Manual,
}

impl SelectedSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qualtrics => "qualtrics",
            Self::LinkedIn => "linkedin",
            Self::ClearingHouse => "clearinghouse",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for SelectedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SourceKind> for SelectedSource {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Qualtrics => Self::Qualtrics,
            SourceKind::LinkedIn => Self::LinkedIn,
            SourceKind::ClearingHouse => Self::ClearingHouse,
        }
    }
}

/// The authoritative outcome record for one student.
///
/// Content fields use the empty string for "not known" — the feeds make
/// no distinction between an absent answer and a blank one, and neither
/// does anything downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterRecord {
    pub selected_source: SelectedSource,
    #[serde(default)]
    pub current_activity: String,
    #[serde(default)]
    pub employment_status: String,
    #[serde(default)]
    pub current_employer: String,
    #[serde(default)]
    pub current_position: String,
    #[serde(default)]
    pub enrollment_status: String,
    #[serde(default)]
    pub current_institution: String,
    /// RFC 3339; refreshed on every write.
    #[serde(default)]
    pub last_updated: String,
}

impl MasterRecord {
    pub fn new(selected_source: SelectedSource) -> Self {
        Self {
            selected_source,
            current_activity: String::new(),
            employment_status: String::new(),
            current_employer: String::new(),
            current_position: String::new(),
            enrollment_status: String::new(),
            current_institution: String::new(),
            last_updated: String::new(),
        }
    }
}

/// A write against a student's master record, as POSTed to the API.
///
/// `None` fields are omitted from the request body and keep their
/// existing value when merged onto a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterPatch {
    pub selected_source: SelectedSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_employer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_institution: Option<String>,
}

impl MasterPatch {
    pub fn new(selected_source: SelectedSource) -> Self {
        Self {
            selected_source,
            current_activity: None,
            employment_status: None,
            current_employer: None,
            current_position: None,
            enrollment_status: None,
            current_institution: None,
        }
    }
}
