//! Interpreting search backend responses
//!
//! The backend's JSON shape is not contractually guaranteed, so a body is
//! first classified into [`BackendResponse`] and only the `Results` branch
//! is mapped into domain results.

use scout_domain::SearchResult;
use serde_json::Value;
use tracing::{debug, warn};

/// A backend body, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResponse {
    /// `{"results": [...]}`
    Results(Vec<Value>),
    /// Anything else, with a description of what was found
    Malformed(String),
}

impl BackendResponse {
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => BackendResponse::Results(items),
                Some(other) => BackendResponse::Malformed(format!(
                    "'results' is {}, expected an array",
                    json_type(&other)
                )),
                None => BackendResponse::Malformed("response has no 'results' field".to_string()),
            },
            other => BackendResponse::Malformed(format!(
                "response is {}, expected an object",
                json_type(&other)
            )),
        }
    }

    /// Map entries into results in backend order.
    ///
    /// A malformed body degrades to an empty list with a warning. Entries
    /// that are not objects are skipped.
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            BackendResponse::Results(items) => items.iter().filter_map(parse_entry).collect(),
            BackendResponse::Malformed(description) => {
                warn!("Unexpected search response shape: {}", description);
                Vec::new()
            }
        }
    }
}

fn parse_entry(entry: &Value) -> Option<SearchResult> {
    let Some(obj) = entry.as_object() else {
        debug!("Skipping non-object search result: {}", json_type(entry));
        return None;
    };

    let text = |key: &str| obj.get(key).and_then(Value::as_str);

    let mut result = SearchResult::new(
        text("url").unwrap_or_default(),
        text("title").map(str::to_string),
        text("content").unwrap_or_default(),
    );
    if let Some(score) = obj.get("score").and_then(Value::as_f64) {
        result = result.with_score(score);
    }
    if let Some(raw) = text("raw_content") {
        result = result.with_raw_content(raw);
    }
    Some(result)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
