//! Shared data models for the video analysis client.
//!
//! This crate provides Serde-serializable types for:
//! - The analysis request and its form encoding
//! - The analysis result returned by the endpoint
//! - YouTube URL heuristics

pub mod analysis;
pub mod request;
pub mod utils;

// Re-export common types
pub use analysis::{backend_error, AnalysisResult, ViewCount};
pub use request::{AnalyzeRequest, FORM_CONTENT_TYPE};
pub use utils::looks_like_youtube_url;
