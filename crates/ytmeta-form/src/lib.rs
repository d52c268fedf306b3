//! Video analysis form handler.
//!
//! Submits a video URL to the analysis endpoint and renders the result into
//! an explicit [`ViewModel`] with a results panel and an error panel.
//! Concurrent submissions are ordered by generation: only the latest
//! submission may change the view.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod view;

pub use analyzer::Analyzer;
pub use config::FormConfig;
pub use error::{SubmitError, SubmitResult};
pub use handler::{SubmissionHandler, SubmitOutcome};
pub use view::{DisplayFields, Panel, ViewModel};
