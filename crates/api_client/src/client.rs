//! Outcomes API HTTP client.
//!
//! Blocking reqwest client (no async runtime required). Covers the full
//! dashboard surface: paged listing → single student → master-record
//! write → filter options.

use std::time::Duration;

use serde::Deserialize;

use gradtrack_core::{MasterPatch, Student};

/// Outcomes API client (blocking).
#[derive(Clone)]
pub struct OutcomesClient {
    http: reqwest::blocking::Client,
    api_base: String,
}

/// Error type for API operations.
#[derive(Debug)]
pub enum ApiError {
    /// Network/transport error (connect, timeout, body read)
    Network(String),
    /// Non-2xx response, carrying the HTTP status and response text
    Http(u16, String),
    /// Response body did not parse as the expected JSON shape
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Server-side filters and paging for the listing endpoint. `None`
/// fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentQuery {
    pub name: Option<String>,
    pub major: Option<String>,
    pub school: Option<String>,
    pub term: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl StudentQuery {
    /// Same filters, pinned to one page.
    pub fn with_page(&self, limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            ..self.clone()
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push_text = |key, value: &Option<String>| {
            if let Some(v) = value {
                if !v.is_empty() {
                    pairs.push((key, v.clone()));
                }
            }
        };
        push_text("name", &self.name);
        push_text("major", &self.major);
        push_text("school", &self.school);
        push_text("term", &self.term);
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// One page of the student listing.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentsPage {
    pub count: usize,
    pub total: usize,
    pub offset: u32,
    pub limit: u32,
    pub has_more: bool,
    pub students: Vec<Student>,
}

/// Acknowledgement returned by the master-record write.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveReceipt {
    pub message: String,
    pub uid: String,
}

impl OutcomesClient {
    /// Create a new client against an API base URL (scheme + host, no
    /// trailing slash required).
    pub fn new(api_base: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("gradtrack/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetch one page of students with optional server-side filters.
    pub fn list_students(&self, query: &StudentQuery) -> Result<StudentsPage, ApiError> {
        let url = format!("{}/api/students", self.api_base);
        let resp = self.get(&url, &query.query_pairs())?;
        resp.json::<StudentsPage>()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch a single student by UID.
    pub fn get_student(&self, uid: &str) -> Result<Student, ApiError> {
        let url = format!("{}/api/students/{}", self.api_base, uid);
        let resp = self.get(&url, &[])?;
        resp.json::<Student>()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Write a master-record patch for a student.
    ///
    /// Local state must only change after this returns Ok — the backend
    /// copy is authoritative.
    pub fn save_master(&self, uid: &str, patch: &MasterPatch) -> Result<SaveReceipt, ApiError> {
        let url = format!("{}/api/students/{}/master", self.api_base, uid);
        let resp = self.post_json(&url, patch)?;
        resp.json::<SaveReceipt>()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Distinct majors for the filter dropdowns.
    pub fn majors(&self) -> Result<Vec<String>, ApiError> {
        self.filter_options("majors")
    }

    /// Distinct schools for the filter dropdowns.
    pub fn schools(&self) -> Result<Vec<String>, ApiError> {
        self.filter_options("schools")
    }

    /// Distinct terms for the filter dropdowns.
    pub fn terms(&self) -> Result<Vec<String>, ApiError> {
        self.filter_options("terms")
    }

    fn filter_options(&self, which: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/filters/{}", self.api_base, which);
        let resp = self.get(&url, &[])?;
        let json: serde_json::Value = resp.json().map_err(|e| ApiError::Parse(e.to_string()))?;

        json[which]
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .ok_or_else(|| ApiError::Parse(format!("Missing {} in response", which)))
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn get(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let mut req = self.http.get(url);
        if !query.is_empty() {
            req = req.query(query);
        }
        let response = req.send().map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)
    }

    fn post_json<B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)
    }

    fn check(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ApiError> {
        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Http(status, body));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradtrack_core::SelectedSource;
    use httpmock::prelude::*;
    use serde_json::json;

    fn page_body(students: Vec<serde_json::Value>, total: usize, offset: u32, has_more: bool) -> serde_json::Value {
        json!({
            "count": students.len(),
            "total": total,
            "offset": offset,
            "limit": 20,
            "has_more": has_more,
            "students": students,
        })
    }

    fn student_json(uid: &str, name: &str) -> serde_json::Value {
        json!({
            "uid": uid,
            "name": name,
            "major": "CMSC",
            "school": "CMNS",
            "term": "202405",
            "qualtrics_data": null,
            "linkedin_data": null,
            "clearinghouse_data": null,
            "master_data": null,
        })
    }

    #[test]
    fn test_list_students_sends_filters_and_paging() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/students")
                .query_param("name", "lee")
                .query_param("major", "CMSC")
                .query_param("limit", "20")
                .query_param("offset", "40")
                .query_param_missing("school")
                .query_param_missing("term");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(page_body(vec![student_json("117001234", "Jordan Lee")], 41, 40, false));
        });

        let client = OutcomesClient::new(server.base_url());
        let query = StudentQuery {
            name: Some("lee".into()),
            major: Some("CMSC".into()),
            school: Some(String::new()),
            ..Default::default()
        }
        .with_page(20, 40);

        let page = client.list_students(&query).unwrap();
        mock.assert();
        assert_eq!(page.count, 1);
        assert_eq!(page.total, 41);
        assert!(!page.has_more);
        assert_eq!(page.students[0].name, "Jordan Lee");
    }

    #[test]
    fn test_non_2xx_carries_status_and_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/students/117000000");
            then.status(404).body("Student with UID 117000000 not found");
        });

        let client = OutcomesClient::new(server.base_url());
        let err = client.get_student("117000000").unwrap_err();
        match err {
            ApiError::Http(404, text) => assert!(text.contains("not found")),
            other => panic!("expected Http(404, _), got {:?}", other),
        }
    }

    #[test]
    fn test_save_master_posts_snake_case_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/students/117001234/master")
                .header("content-type", "application/json")
                .json_body_includes(
                    r#"{"selected_source": "manual", "employment_status": "employed", "current_employer": "Acme"}"#,
                );
            then.status(200)
                .json_body(json!({"message": "Master data saved successfully", "uid": "117001234"}));
        });

        let client = OutcomesClient::new(server.base_url());
        let mut patch = MasterPatch::new(SelectedSource::Manual);
        patch.employment_status = Some("employed".into());
        patch.current_employer = Some("Acme".into());

        let receipt = client.save_master("117001234", &patch).unwrap();
        mock.assert();
        assert_eq!(receipt.uid, "117001234");
    }

    #[test]
    fn test_save_master_failure_is_surfaced() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/students/117001234/master");
            then.status(500).body("Error saving master data: db down");
        });

        let client = OutcomesClient::new(server.base_url());
        let patch = MasterPatch::new(SelectedSource::Manual);
        let err = client.save_master("117001234", &patch).unwrap_err();
        match err {
            ApiError::Http(500, text) => assert!(text.contains("db down")),
            other => panic!("expected Http(500, _), got {:?}", other),
        }
    }

    #[test]
    fn test_filter_options() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/filters/majors");
            then.status(200).json_body(json!({"majors": ["BMGT", "CMSC", "HIST"]}));
        });

        let client = OutcomesClient::new(server.base_url());
        assert_eq!(client.majors().unwrap(), vec!["BMGT", "CMSC", "HIST"]);
    }

    #[test]
    fn test_filter_options_missing_key_is_parse_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/filters/terms");
            then.status(200).json_body(json!({"values": []}));
        });

        let client = OutcomesClient::new(server.base_url());
        match client.terms().unwrap_err() {
            ApiError::Parse(msg) => assert!(msg.contains("terms")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OutcomesClient::new("http://localhost:8000/");
        assert_eq!(client.api_base(), "http://localhost:8000");
    }
}
