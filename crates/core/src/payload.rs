use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form key/value payload carried by an imported source record.
///
/// Field sets vary by feed and by import batch, so access is total:
/// missing keys, nulls, and nested values read as empty rather than
/// erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(serde_json::Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Scalar value for a key, rendered as text. Missing keys, nulls,
    /// arrays, and objects all read as the empty string.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// First non-empty text value along a fallback chain of keys.
    /// Upstream feeds rename columns between batches; callers probe the
    /// spellings they have seen.
    pub fn first_text(&self, keys: &[&str]) -> String {
        for key in keys {
            let value = self.text(key);
            if !value.is_empty() {
                return value;
            }
        }
        String::new()
    }

    /// True when the text value for `key` contains `needle`
    /// (case-sensitive, matching the upstream survey conventions).
    pub fn text_contains(&self, key: &str, needle: &str) -> bool {
        self.text(key).contains(needle)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<serde_json::Map<String, Value>> for Payload {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_text_scalars() {
        let p = payload(json!({
            "Employment Status": "Employed Full-Time",
            "years": 3,
            "enrolled": true,
        }));
        assert_eq!(p.text("Employment Status"), "Employed Full-Time");
        assert_eq!(p.text("years"), "3");
        assert_eq!(p.text("enrolled"), "true");
    }

    #[test]
    fn test_text_fails_closed() {
        let p = payload(json!({
            "missing_value": null,
            "nested": {"a": 1},
            "list": [1, 2, 3],
        }));
        assert_eq!(p.text("missing_value"), "");
        assert_eq!(p.text("nested"), "");
        assert_eq!(p.text("list"), "");
        assert_eq!(p.text("never_present"), "");
    }

    #[test]
    fn test_first_text_probes_in_order() {
        let p = payload(json!({
            "college_name": "",
            "institution": "State University",
            "school": "ignored",
        }));
        assert_eq!(
            p.first_text(&["College Name", "college_name", "institution", "school"]),
            "State University",
        );
        assert_eq!(p.first_text(&["a", "b"]), "");
    }

    #[test]
    fn test_text_contains_is_case_sensitive() {
        let p = payload(json!({"Employment Status": "Graduate or professional school"}));
        assert!(p.text_contains("Employment Status", "Graduate"));
        assert!(!p.text_contains("Employment Status", "graduate or"));
    }

    #[test]
    fn test_transparent_serde() {
        let p = payload(json!({"k": "v"}));
        let out = serde_json::to_value(&p).unwrap();
        assert_eq!(out, json!({"k": "v"}));
    }
}
