use std::fmt;

use serde::{Deserialize, Serialize};

/// Answer substituted when the model gave none
pub const INSUFFICIENT_ANSWER: &str = "Insufficient information to answer";

/// Answer the prompts tell the model to give when the transcript is silent
pub const NOT_ENOUGH_DATA: &str = "Not enough data to answer";

const NO_QUOTE: &str = "No specific quote available";

/// Evidence variant attached to an [`AnalysisRecord`]
///
/// Each variant knows its own placeholder and the confidence to assume when the model
/// reported none, so finalization is mode-appropriate without a runtime flag.
pub trait Evidence: Sized {
    /// Confidence used when the record carries none
    const DEFAULT_CONFIDENCE: &'static str;

    /// Item inserted when the model cited no evidence
    fn placeholder() -> Self;
}

/// Single-interview evidence: a timestamped quote with an explanation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedEvidence {
    pub timestamp: String,
    pub quote: String,
    pub explanation: String,
}

impl Evidence for TimestampedEvidence {
    const DEFAULT_CONFIDENCE: &'static str = "Low";

    fn placeholder() -> Self {
        Self {
            timestamp: "N/A".to_string(),
            quote: NO_QUOTE.to_string(),
            explanation: "The analysis did not identify evidence for this learning goal."
                .to_string(),
        }
    }
}

impl fmt::Display for TimestampedEvidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Timestamp: {}", self.timestamp)?;
        writeln!(f, "  Quote: \"{}\"", self.quote)?;
        write!(f, "  Explanation: {}", self.explanation)
    }
}

/// Meta-analysis evidence: a quote with its surrounding context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedEvidence {
    pub quote: String,
    pub context: String,
}

impl Evidence for QuotedEvidence {
    const DEFAULT_CONFIDENCE: &'static str = "0";

    fn placeholder() -> Self {
        Self {
            quote: NO_QUOTE.to_string(),
            context: "No interview evidence was available for this learning goal.".to_string(),
        }
    }
}

impl fmt::Display for QuotedEvidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Quote: \"{}\"", self.quote)?;
        write!(f, "  Context: {}", self.context)
    }
}

/// One answer to one learning goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord<E> {
    pub learning_goal_label: String,
    pub answer: String,
    pub evidence: Vec<E>,
    pub confidence: String,
}

/// Record produced by single-interview analysis (High/Medium/Low confidence)
pub type InterviewRecord = AnalysisRecord<TimestampedEvidence>;

/// Record produced by analyzing one chunk of interviews (0-100 confidence)
pub type ChunkRecord = AnalysisRecord<QuotedEvidence>;

/// Final per-goal record of a meta-analysis (0-100 confidence)
pub type SynthesizedRecord = AnalysisRecord<QuotedEvidence>;

/// All records parsed from one chunk's reply
pub type ChunkResult = Vec<ChunkRecord>;

impl<E: Evidence> AnalysisRecord<E> {
    /// Open an empty record for the given goal label
    pub fn open(label: impl Into<String>) -> Self {
        Self {
            learning_goal_label: label.into(),
            answer: String::new(),
            evidence: Vec::new(),
            confidence: String::new(),
        }
    }

    /// A finalized record carrying only defaults
    pub fn placeholder(label: impl Into<String>) -> Self {
        let mut record = Self::open(label);
        record.finalize();
        record
    }

    /// Fill missing fields with defaults. Complete records are left untouched.
    pub fn finalize(&mut self) {
        if self.evidence.is_empty() {
            self.evidence.push(E::placeholder());
        }
        if self.confidence.trim().is_empty() {
            self.confidence = E::DEFAULT_CONFIDENCE.to_string();
        }
        let answer = self.answer.trim();
        if answer.is_empty() || answer == NOT_ENOUGH_DATA {
            self.answer = INSUFFICIENT_ANSWER.to_string();
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.answer.is_empty() && !self.confidence.is_empty() && !self.evidence.is_empty()
    }
}

impl<E: fmt::Display> fmt::Display for AnalysisRecord<E> {
    /// Renders the record in the same line grammar the model is asked to produce
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.learning_goal_label)?;
        writeln!(f, "Answer: {}", self.answer)?;
        writeln!(f, "Evidence:")?;
        for item in &self.evidence {
            writeln!(f, "{}", item)?;
        }
        write!(f, "Confidence: {}", self.confidence)
    }
}
