//! Analysis endpoint HTTP client.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use ytmeta_models::{backend_error, AnalysisResult, AnalyzeRequest, FORM_CONTENT_TYPE};

use crate::error::{AnalyzeError, AnalyzeResult};

const DEFAULT_ENDPOINT: &str = "http://localhost:5000/analyze";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the analysis client.
#[derive(Debug, Clone)]
pub struct AnalyzeClientConfig {
    /// Full URL of the `/analyze` endpoint
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AnalyzeClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AnalyzeClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("ANALYZE_ENDPOINT")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(
                std::env::var("ANALYZE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.trim().parse().ok())
                    .filter(|&secs: &u64| secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

/// Client for the video analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: Client,
    config: AnalyzeClientConfig,
}

impl AnalyzeClient {
    /// Create a new analysis client.
    pub fn new(config: AnalyzeClientConfig) -> AnalyzeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AnalyzeError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AnalyzeResult<Self> {
        Self::new(AnalyzeClientConfig::from_env())
    }

    pub fn config(&self) -> &AnalyzeClientConfig {
        &self.config
    }

    /// Submit a video URL and decode the metadata.
    ///
    /// Failures are checked in order: HTTP status, backend `error` field,
    /// then JSON decoding of the result.
    pub async fn analyze(&self, url: &str) -> AnalyzeResult<AnalysisResult> {
        let request = AnalyzeRequest::new(url);

        debug!(endpoint = %self.config.endpoint, "Sending analysis request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(request.form_body())
            .send()
            .await
            .map_err(|e| AnalyzeError::from_reqwest(e, self.config.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalyzeError::from_reqwest(e, self.config.timeout))?;
        let parsed = serde_json::from_str::<Value>(&body);

        if !status.is_success() {
            let detail = parsed.as_ref().ok().and_then(backend_error);
            warn!(status = status.as_u16(), "Analysis endpoint returned error status");
            return Err(AnalyzeError::from_http_status(status.as_u16(), detail));
        }

        let value = parsed?;
        if let Some(message) = backend_error(&value) {
            return Err(AnalyzeError::Backend(message));
        }

        let result: AnalysisResult = serde_json::from_value(value)?;
        debug!(title = %result.title, "Analysis succeeded");
        Ok(result)
    }
}
