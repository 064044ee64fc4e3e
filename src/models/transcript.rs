use serde::{Deserialize, Serialize};

use crate::planner::TokenEstimator;

/// One interview transcript, read-only input to chunk planning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptUnit {
    pub ordinal: usize,
    pub interview: String,
    pub text: String,
    pub estimated_tokens: usize,
}

impl TranscriptUnit {
    pub fn new(ordinal: usize, interview: impl Into<String>, text: impl Into<String>) -> Self {
        Self { ordinal, interview: interview.into(), text: text.into(), estimated_tokens: 0 }
    }

    /// Build a unit and fill in its token estimate
    pub fn estimated(
        ordinal: usize,
        interview: impl Into<String>,
        text: impl Into<String>,
        estimator: &dyn TokenEstimator,
    ) -> Self {
        let mut unit = Self::new(ordinal, interview, text);
        unit.estimated_tokens = estimator.estimate(&unit.text);
        unit
    }

    pub fn with_tokens(mut self, estimated_tokens: usize) -> Self {
        self.estimated_tokens = estimated_tokens;
        self
    }
}
