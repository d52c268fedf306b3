//! Client for the video analysis endpoint.
//!
//! Posts a form-encoded video URL to the configured `/analyze` endpoint and
//! decodes the JSON reply into an [`AnalysisResult`](ytmeta_models::AnalysisResult),
//! classifying every failure into the [`AnalyzeError`] taxonomy.

pub mod client;
pub mod error;

pub use client::{AnalyzeClient, AnalyzeClientConfig};
pub use error::{AnalyzeError, AnalyzeResult, ErrorKind};
