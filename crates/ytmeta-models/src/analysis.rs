//! Analysis result returned by the `/analyze` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Video metadata returned on a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Video title
    pub title: String,
    /// Channel display name
    pub channel: String,
    /// View count, as text ("1,000") or a number
    pub views: ViewCount,
    /// Human-readable duration ("3:00")
    pub duration: String,
    /// Video keywords
    #[serde(default)]
    pub tags: Vec<String>,
    /// Thumbnail image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl AnalysisResult {
    /// Thumbnail URL, treating an empty string as absent.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Tags joined for display, or `None` when there are none.
    pub fn joined_tags(&self) -> Option<String> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.join(", "))
        }
    }
}

/// View count as reported by the backend.
///
/// Scraped pages yield text such as `"1,000"` or `"N/A"`; other deployments
/// return a plain number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewCount {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewCount::Number(n) => write!(f, "{}", n),
            ViewCount::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ViewCount {
    fn from(n: u64) -> Self {
        ViewCount::Number(n.into())
    }
}

impl From<&str> for ViewCount {
    fn from(s: &str) -> Self {
        ViewCount::Text(s.to_string())
    }
}

/// Extract the failure message from a response body.
///
/// Any truthy `error` value counts: strings are returned verbatim, objects
/// with a string `message` yield that message, anything else its JSON text.
/// `null`, `false`, `0` and blank strings are not errors.
pub fn backend_error(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) if !message.trim().is_empty() => Some(message.to_string()),
            _ => Some(error.to_string()),
        },
        _ => Some(error.to_string()),
    }
}
