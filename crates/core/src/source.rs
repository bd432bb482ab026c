use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::payload::Payload;

/// The three external feeds a record can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Qualtrics,
    LinkedIn,
    ClearingHouse,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [
        SourceKind::Qualtrics,
        SourceKind::LinkedIn,
        SourceKind::ClearingHouse,
    ];

    /// Wire tag, matching the API's `selected_source` values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qualtrics => "qualtrics",
            Self::LinkedIn => "linkedin",
            Self::ClearingHouse => "clearinghouse",
        }
    }

    /// Human-facing name for summaries and report columns.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Qualtrics => "Qualtrics",
            Self::LinkedIn => "LinkedIn",
            Self::ClearingHouse => "ClearingHouse",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qualtrics" => Ok(Self::Qualtrics),
            "linkedin" => Ok(Self::LinkedIn),
            "clearinghouse" => Ok(Self::ClearingHouse),
            other => Err(format!(
                "unknown source: {other:?} (expected qualtrics, linkedin, or clearinghouse)"
            )),
        }
    }
}

/// One survey response imported from the survey tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualtricsRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub survey_id: String,
    #[serde(default)]
    pub response_id: String,
    #[serde(default)]
    pub recorded_at: String,
    #[serde(default)]
    pub source_file: String,
    #[serde(default)]
    pub payload: Payload,
}

/// One position row imported from the professional-network export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedInRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub position_key: String,
    #[serde(default)]
    pub source_file: String,
    #[serde(default)]
    pub payload: Payload,
}

/// One enrollment row imported from the enrollment-verification feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearingHouseRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub record_key: String,
    #[serde(default)]
    pub source_file: String,
    #[serde(default)]
    pub payload: Payload,
}
