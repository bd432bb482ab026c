use std::fmt;
use std::str::FromStr;

use crate::source::SourceKind;
use crate::student::Student;

/// One entry in the dashboard's source filter: a specific feed, or the
/// `no-source` sentinel matching students with no records from any feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFilter {
    Kind(SourceKind),
    NoSource,
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => kind.fmt(f),
            Self::NoSource => f.write_str("none"),
        }
    }
}

impl FromStr for SourceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "no-source" => Ok(Self::NoSource),
            other => other.parse::<SourceKind>().map(Self::Kind),
        }
    }
}

/// Dashboard filter criteria. Clauses AND together; within the source
/// set, entries OR together.
///
/// An entirely empty set of criteria matches NOTHING: the dashboard's
/// home state shows a prompt, not the full roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub name: String,
    pub uid: String,
    pub major: String,
    pub school: String,
    pub term: String,
    pub sources: Vec<SourceFilter>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.uid.is_empty()
            && self.major.is_empty()
            && self.school.is_empty()
            && self.term.is_empty()
            && self.sources.is_empty()
    }
}

/// Export page filters: exact single-selects, `None` meaning "all".
/// Independent of [`FilterCriteria`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportFilter {
    pub major: Option<String>,
    pub school: Option<String>,
    pub term: Option<String>,
}

impl ExportFilter {
    pub fn matches(&self, student: &Student) -> bool {
        let matches_major = self.major.as_deref().is_none_or(|m| student.major == m);
        let matches_school = self.school.as_deref().is_none_or(|s| student.school == s);
        let matches_term = self.term.as_deref().is_none_or(|t| student.term == t);
        matches_major && matches_school && matches_term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_filter_parse() {
        assert_eq!(
            "qualtrics".parse::<SourceFilter>().unwrap(),
            SourceFilter::Kind(SourceKind::Qualtrics),
        );
        assert_eq!("none".parse::<SourceFilter>().unwrap(), SourceFilter::NoSource);
        assert_eq!(
            "no-source".parse::<SourceFilter>().unwrap(),
            SourceFilter::NoSource,
        );
        assert!("everything".parse::<SourceFilter>().is_err());
    }

    #[test]
    fn test_criteria_is_empty() {
        assert!(FilterCriteria::default().is_empty());

        let with_uid = FilterCriteria {
            uid: "117".into(),
            ..Default::default()
        };
        assert!(!with_uid.is_empty());

        let with_source = FilterCriteria {
            sources: vec![SourceFilter::NoSource],
            ..Default::default()
        };
        assert!(!with_source.is_empty());
    }

    #[test]
    fn test_export_filter_exact_match() {
        let student = Student {
            uid: "1".into(),
            major: "CMSC".into(),
            school: "CMNS".into(),
            term: "202405".into(),
            ..Default::default()
        };

        assert!(ExportFilter::default().matches(&student));
        assert!(ExportFilter {
            major: Some("CMSC".into()),
            ..Default::default()
        }
        .matches(&student));
        // Exact, not substring
        assert!(!ExportFilter {
            major: Some("CMS".into()),
            ..Default::default()
        }
        .matches(&student));
        assert!(!ExportFilter {
            term: Some("202312".into()),
            ..Default::default()
        }
        .matches(&student));
    }
}
