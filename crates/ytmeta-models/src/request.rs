//! Analysis request sent to the `/analyze` endpoint.

use serde::{Deserialize, Serialize};

/// Content type of the analysis request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request for video analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Video URL as entered by the user (already trimmed)
    pub url: String,
}

impl AnalyzeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Encode as a form body: `url=<percent-encoded url>`.
    pub fn form_body(&self) -> String {
        format!("url={}", urlencoding::encode(&self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_percent_encodes() {
        let request = AnalyzeRequest::new("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42");
        assert_eq!(
            request.form_body(),
            "url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ%26t%3D42"
        );
    }

    #[test]
    fn test_form_body_encodes_spaces() {
        assert_eq!(AnalyzeRequest::new("a b").form_body(), "url=a%20b");
    }
}
