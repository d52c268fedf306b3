//! Submission metrics.
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding application installs a recorder.

use metrics::{counter, histogram};

use crate::handler::SubmitOutcome;

/// Metric name constants for consistency.
pub mod names {
    /// Total submissions by outcome.
    pub const SUBMISSIONS_TOTAL: &str = "ytmeta_submissions_total";

    /// Analysis requests that hit the client timeout.
    pub const TIMEOUTS_TOTAL: &str = "ytmeta_timeouts_total";

    /// Analysis request latency in seconds.
    pub const ANALYZE_LATENCY_SECONDS: &str = "ytmeta_analyze_latency_seconds";
}

/// Record the outcome of a submission.
pub fn record_submission(outcome: &SubmitOutcome) {
    counter!(
        names::SUBMISSIONS_TOTAL,
        "outcome" => outcome.label()
    )
    .increment(1);
}

/// Record an analysis request that timed out.
pub fn record_timeout() {
    counter!(names::TIMEOUTS_TOTAL).increment(1);
}

/// Record the latency of an analysis request.
pub fn record_latency(latency_secs: f64) {
    histogram!(names::ANALYZE_LATENCY_SECONDS).record(latency_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        assert!(names::SUBMISSIONS_TOTAL.contains("submissions"));
        assert!(names::TIMEOUTS_TOTAL.contains("timeouts"));
        assert!(names::ANALYZE_LATENCY_SECONDS.contains("latency"));
    }
}
