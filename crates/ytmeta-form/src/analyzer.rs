//! Seam between the form handler and the analysis endpoint.

use async_trait::async_trait;
use ytmeta_client::{AnalyzeClient, AnalyzeResult};
use ytmeta_models::AnalysisResult;

/// Something that can analyze a video URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze an already-trimmed, non-empty URL.
    async fn analyze(&self, url: &str) -> AnalyzeResult<AnalysisResult>;
}

#[async_trait]
impl Analyzer for AnalyzeClient {
    async fn analyze(&self, url: &str) -> AnalyzeResult<AnalysisResult> {
        AnalyzeClient::analyze(self, url).await
    }
}
