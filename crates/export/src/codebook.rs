use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ExportError;

/// Lookup tables mapping internal major/school codes to display names.
///
/// The registrar's feeds carry codes (`CMSC`, `ENGR`); reports carry
/// names. Unmapped codes resolve to themselves so a stale code book
/// never blanks a column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeBook {
    #[serde(default)]
    pub majors: BTreeMap<String, String>,
    #[serde(default)]
    pub schools: BTreeMap<String, String>,
}

impl CodeBook {
    pub fn from_toml(input: &str) -> Result<Self, ExportError> {
        toml::from_str(input).map_err(|e| ExportError::CodeBook(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let input = std::fs::read_to_string(path).map_err(|e| {
            ExportError::CodeBook(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&input)
    }

    /// Display name for a major code, falling back to the raw code.
    pub fn major_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.majors.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Display name for a school code, falling back to the raw code.
    pub fn school_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.schools.get(code).map(String::as_str).unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[majors]
CMSC = "Computer Science"
ENEE = "Electrical Engineering"

[schools]
CMNS = "College of Computer, Mathematical, and Natural Sciences"
ENGR = "A. James Clark School of Engineering"
"#;

    #[test]
    fn test_lookup_with_fallback() {
        let book = CodeBook::from_toml(SAMPLE).unwrap();
        assert_eq!(book.major_name("CMSC"), "Computer Science");
        assert_eq!(book.major_name("HIST"), "HIST");
        assert_eq!(
            book.school_name("ENGR"),
            "A. James Clark School of Engineering",
        );
        assert_eq!(book.school_name("XXXX"), "XXXX");
    }

    #[test]
    fn test_empty_sections_are_fine() {
        let book = CodeBook::from_toml("").unwrap();
        assert_eq!(book.major_name("CMSC"), "CMSC");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = CodeBook::from_toml("majors = 3").unwrap_err();
        assert!(matches!(err, ExportError::CodeBook(_)));
    }
}
