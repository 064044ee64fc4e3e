//! Line classification for model replies.
//!
//! Each trimmed line maps to exactly one [`LineToken`]. Markers are case-sensitive and matched at
//! line start, in a fixed precedence order (see [`classify`]).

use crate::models::goal::label_for;
use crate::models::{Evidence, QuotedEvidence, TimestampedEvidence};

pub const GOAL_HEADER_MARKER: &str = "[Learning Goal";
pub const ANSWER_MARKER: &str = "Answer:";
pub const EVIDENCE_SECTION_MARKER: &str = "Evidence:";
pub const CONFIDENCE_MARKER: &str = "Confidence:";

/// Field of an evidence item set by a continuation line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceField {
    Quote,
    Explanation,
    Context,
}

/// Evidence wire syntax for one analysis mode
pub trait EvidenceSyntax: Evidence {
    /// Marker opening a new evidence item, e.g. `- Timestamp:`
    const START_MARKER: &'static str;

    /// Continuation markers accepted in this mode
    const CONTINUATIONS: &'static [(&'static str, EvidenceField)];

    /// New item holding the value that followed the start marker
    fn start(value: &str) -> Self;

    fn set(&mut self, field: EvidenceField, value: &str);
}

impl EvidenceSyntax for TimestampedEvidence {
    const START_MARKER: &'static str = "- Timestamp:";
    const CONTINUATIONS: &'static [(&'static str, EvidenceField)] =
        &[("Quote:", EvidenceField::Quote), ("Explanation:", EvidenceField::Explanation)];

    fn start(value: &str) -> Self {
        Self { timestamp: value.to_string(), ..Self::default() }
    }

    fn set(&mut self, field: EvidenceField, value: &str) {
        match field {
            EvidenceField::Quote => self.quote = unquote(value).to_string(),
            EvidenceField::Explanation | EvidenceField::Context => {
                self.explanation = value.to_string()
            }
        }
    }
}

impl EvidenceSyntax for QuotedEvidence {
    const START_MARKER: &'static str = "- Quote:";
    const CONTINUATIONS: &'static [(&'static str, EvidenceField)] =
        &[("Context:", EvidenceField::Context)];

    fn start(value: &str) -> Self {
        Self { quote: unquote(value).to_string(), ..Self::default() }
    }

    fn set(&mut self, field: EvidenceField, value: &str) {
        match field {
            EvidenceField::Quote => self.quote = unquote(value).to_string(),
            EvidenceField::Context | EvidenceField::Explanation => self.context = value.to_string(),
        }
    }
}

/// Classified reply line; payloads are trimmed remainders after the marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineToken<'a> {
    GoalHeader(String),
    AnswerLine(&'a str),
    EvidenceSection,
    EvidenceStart(&'a str),
    EvidenceContinuation(EvidenceField, &'a str),
    ConfidenceLine(&'a str),
    Other,
}

/// Classify one line for the evidence syntax `E`
///
/// Precedence: goal header, answer, evidence section, evidence start, continuation,
/// confidence, anything else.
pub fn classify<E: EvidenceSyntax>(raw: &str) -> LineToken<'_> {
    let line = raw.trim();

    if line.starts_with(GOAL_HEADER_MARKER) {
        return LineToken::GoalHeader(canonical_label(line));
    }
    if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
        return LineToken::AnswerLine(rest.trim());
    }
    if line.starts_with(EVIDENCE_SECTION_MARKER) {
        return LineToken::EvidenceSection;
    }
    if let Some(rest) = line.strip_prefix(E::START_MARKER) {
        return LineToken::EvidenceStart(rest.trim());
    }
    for (marker, field) in E::CONTINUATIONS {
        if let Some(rest) = line.strip_prefix(*marker) {
            return LineToken::EvidenceContinuation(*field, rest.trim());
        }
    }
    if let Some(rest) = line.strip_prefix(CONFIDENCE_MARKER) {
        return LineToken::ConfidenceLine(rest.trim());
    }

    LineToken::Other
}

/// Reduce a goal header to `[Learning Goal N]`
///
/// Headers like `[Learning Goal 2: Pricing]` or `[Learning Goal 2]:` share the label of goal 2.
/// A header without a readable number keeps its trimmed text so it joins nothing by accident.
pub fn canonical_label(header: &str) -> String {
    let Some(rest) = header.strip_prefix(GOAL_HEADER_MARKER) else {
        return header.to_string();
    };
    let rest = rest.trim_start();
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<usize>() {
        Ok(index) => label_for(index),
        Err(_) => header.to_string(),
    }
}

/// Strip one pair of surrounding double quotes (straight or curly)
fn unquote(value: &str) -> &str {
    let value = value.trim();
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\u{201c}').and_then(|v| v.strip_suffix('\u{201d}')));
    stripped.unwrap_or(value)
}
