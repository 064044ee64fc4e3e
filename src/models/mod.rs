//! Data models for interview analysis.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`LearningGoal`] - A researcher-authored question, identified on the wire by its label
//! - [`TranscriptUnit`] - One interview transcript with its estimated token count
//! - [`AnalysisRecord`] - One answer to one learning goal, generic over the evidence variant
//! - [`Project`] / [`Interview`] - Project metadata as stored in `projects.json`
//!
//! Records pass through [`AnalysisRecord::finalize`] before leaving the parser, which guarantees
//! a non-empty answer, a non-empty confidence, and at least one evidence item.

pub mod goal;
pub mod project;
pub mod record;
pub mod transcript;

pub use goal::LearningGoal;
pub use project::{Interview, Project, ProjectsFile};
pub use record::{
    AnalysisRecord, ChunkRecord, ChunkResult, Evidence, INSUFFICIENT_ANSWER, InterviewRecord,
    NOT_ENOUGH_DATA, QuotedEvidence, SynthesizedRecord, TimestampedEvidence,
};
pub use transcript::TranscriptUnit;
