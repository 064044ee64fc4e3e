//! Project storage: transcript source and result persistence
//!
//! The analysis pipeline reads through [`TranscriptSource`] and writes through [`ResultStore`];
//! [`ProjectStore`] implements both over a data directory:
//!
//! ```text
//! <data_dir>/projects.json
//! <data_dir>/<encoded project>/...transcripts...
//! <data_dir>/<encoded project>/analysis/meta_analysis.json
//! <data_dir>/<encoded project>/analysis/interviews/<encoded interview>.json
//! ```
//!
//! # Error Handling Strategy
//!
//! - **Project-level failures**: An unreadable `projects.json` or an unknown project name is an
//!   operator error and propagates with context.
//! - **Interview-level failures**: A missing or oversized transcript is logged and that interview
//!   is skipped, so one lost file does not abort a batch.
//! - **Writes**: Result files are written to a temp file and renamed into place.

pub mod results;
pub mod store;

pub use results::{InterviewAnalysis, MetaAnalysisReport};
pub use store::ProjectStore;

use anyhow::Result;

use crate::models::LearningGoal;

/// One interview's transcript as loaded from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub interview: String,
    pub text: String,
}

/// Supplies learning goals and transcripts for a project
pub trait TranscriptSource {
    fn learning_goals(&self, project: &str) -> Result<Vec<LearningGoal>>;

    /// Readable transcripts in interview order; unreadable ones are skipped
    fn transcripts(&self, project: &str) -> Result<Vec<Transcript>>;
}

/// Persists analysis output keyed by project name
pub trait ResultStore {
    fn save_meta_analysis(&self, report: &MetaAnalysisReport) -> Result<()>;

    fn save_interview_analysis(&self, project: &str, analysis: &InterviewAnalysis) -> Result<()>;
}
