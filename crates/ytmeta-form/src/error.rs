//! Submission error types.

use thiserror::Error;
use ytmeta_client::{AnalyzeError, ErrorKind};

pub type SubmitResult<T> = Result<T, SubmitError>;

/// Message shown when the form is submitted without a URL.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a YouTube URL";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
}

impl SubmitError {
    pub fn empty_input() -> Self {
        Self::Validation(EMPTY_INPUT_MESSAGE.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmitError::Validation(_) => ErrorKind::Validation,
            SubmitError::Analyze(e) => e.kind(),
        }
    }

    /// True when the analysis request ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, SubmitError::Analyze(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_empty_input_message() {
        let err = SubmitError::empty_input();
        assert_eq!(err.to_string(), "Please enter a YouTube URL");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_analyze_error_is_transparent() {
        let err: SubmitError = AnalyzeError::Backend("Video not found".to_string()).into();
        assert_eq!(err.to_string(), "Video not found");
        assert_eq!(err.kind(), ErrorKind::Application);
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_timeout_is_reported() {
        let err: SubmitError = AnalyzeError::Timeout(Duration::from_secs(15)).into();
        assert!(err.is_timeout());
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!SubmitError::empty_input().is_timeout());
    }
}
