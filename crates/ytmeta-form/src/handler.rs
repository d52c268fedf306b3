//! Form submission handler.
//!
//! Each submission resets the view, validates the input, calls the analyzer
//! and renders either the results panel or the error panel. Submissions are
//! numbered; a completion is applied only if no newer submission has started
//! since, so the last submitted URL always owns the final view.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::{debug, error, info, info_span, warn, Instrument};
use ytmeta_client::ErrorKind;
use ytmeta_models::{looks_like_youtube_url, AnalysisResult};

use crate::analyzer::Analyzer;
use crate::config::FormConfig;
use crate::error::{SubmitError, SubmitResult};
use crate::metrics;
use crate::view::{DisplayFields, ViewModel};

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results panel shown
    Rendered,
    /// Error panel shown
    Failed(ErrorKind),
    /// A newer submission started first; the view was left untouched
    Superseded,
}

impl SubmitOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitOutcome::Rendered => "rendered",
            SubmitOutcome::Failed(kind) => kind.as_str(),
            SubmitOutcome::Superseded => "superseded",
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered)
    }
}

#[derive(Debug, Default)]
struct FormState {
    generation: u64,
    view: ViewModel,
}

/// Handles submissions of the analysis form.
pub struct SubmissionHandler<A> {
    analyzer: A,
    config: FormConfig,
    state: Mutex<FormState>,
}

impl<A: Analyzer> SubmissionHandler<A> {
    pub fn new(analyzer: A, config: FormConfig) -> Self {
        Self {
            analyzer,
            config,
            state: Mutex::new(FormState::default()),
        }
    }

    /// Current state of the view.
    pub fn snapshot(&self) -> ViewModel {
        self.lock_state().view.clone()
    }

    /// Number of the latest submission.
    pub fn generation(&self) -> u64 {
        self.lock_state().generation
    }

    /// Submit the form with the given input.
    pub async fn submit(&self, raw_input: &str) -> SubmitOutcome {
        let url = raw_input.trim();
        let generation = self.begin();

        let span = info_span!("submission", generation);
        let result = self.run(url).instrument(span).await;

        let outcome = self.complete(generation, result);
        metrics::record_submission(&outcome);
        outcome
    }

    async fn run(&self, url: &str) -> SubmitResult<AnalysisResult> {
        if url.is_empty() {
            return Err(SubmitError::empty_input());
        }

        if !looks_like_youtube_url(url) {
            warn!(url = %url, "Input does not look like a YouTube URL, sending anyway");
        }

        let started = Instant::now();
        let result = self.analyzer.analyze(url).await;
        metrics::record_latency(started.elapsed().as_secs_f64());

        result.map_err(SubmitError::from)
    }

    /// Reset the view and claim a new generation.
    fn begin(&self) -> u64 {
        let mut state = self.lock_state();
        state.generation += 1;
        state.view.reset();
        state.view.in_flight = true;
        state.generation
    }

    fn complete(&self, generation: u64, result: SubmitResult<AnalysisResult>) -> SubmitOutcome {
        let mut state = self.lock_state();

        if state.generation != generation {
            debug!(
                generation,
                latest = state.generation,
                "Discarding stale submission result"
            );
            return SubmitOutcome::Superseded;
        }

        state.view.in_flight = false;

        match result {
            Ok(analysis) => {
                info!(generation, title = %analysis.title, "Rendering analysis result");
                state
                    .view
                    .show_results(DisplayFields::from_result(&analysis, &self.config));
                SubmitOutcome::Rendered
            }
            Err(e) => {
                let timeout = e.is_timeout();
                if timeout {
                    metrics::record_timeout();
                }
                error!(generation, kind = %e.kind(), timeout, "Analysis error: {}", e);
                state.view.show_error(&e.to_string());
                SubmitOutcome::Failed(e.kind())
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
