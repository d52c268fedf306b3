//! Analysis client error types.

use std::time::Duration;

use thiserror::Error;

pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Coarse classification of a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any request was made
    Validation,
    /// Non-success HTTP status or network failure
    Transport,
    /// Backend reported an `error` despite a success status
    Application,
    /// Body was not valid JSON or not a valid result
    Parse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Transport => "transport",
            ErrorKind::Application => "application",
            ErrorKind::Parse => "parse",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Display is the backend's `error` text when it sent one.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    #[error("{0}")]
    Backend(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyzeError {
    /// Build an error for a non-success status, preferring the backend's message.
    pub fn from_http_status(status: u16, detail: Option<String>) -> Self {
        let message = detail.unwrap_or_else(|| format!("HTTP error! status: {}", status));
        Self::HttpStatus { status, message }
    }

    /// Classify a transport failure, separating out timeouts.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Network(err)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyzeError::HttpStatus { .. }
            | AnalyzeError::Timeout(_)
            | AnalyzeError::Network(_) => ErrorKind::Transport,
            AnalyzeError::Backend(_) => ErrorKind::Application,
            AnalyzeError::Json(_) => ErrorKind::Parse,
        }
    }

    /// HTTP status, if the server answered.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AnalyzeError::HttpStatus { status, .. } => Some(*status),
            AnalyzeError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            AnalyzeError::Timeout(_) => true,
            AnalyzeError::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_without_detail() {
        let err = AnalyzeError::from_http_status(500, None);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.http_status(), Some(500));
    }

    #[test]
    fn test_http_status_prefers_backend_detail() {
        let err = AnalyzeError::from_http_status(400, Some("Invalid YouTube URL".to_string()));
        assert_eq!(err.to_string(), "Invalid YouTube URL");
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_backend_error_is_verbatim() {
        let err = AnalyzeError::Backend("Video not found".to_string());
        assert_eq!(err.to_string(), "Video not found");
        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn test_timeout_is_transport() {
        let err = AnalyzeError::Timeout(Duration::from_millis(300));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Timeout after 300ms");
        assert!(!AnalyzeError::from_http_status(504, None).is_timeout());
    }

    #[test]
    fn test_json_error_kind() {
        let err: AnalyzeError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("Invalid response:"));
    }
}
