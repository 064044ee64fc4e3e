//! Response parser: turns a model's semi-structured reply into finalized records.
//!
//! The parser is a two-state machine over [`LineToken`]s:
//!
//! - `SeekingRecord`: everything except a goal header is dropped.
//! - `InRecord`: markers fill the open record; a new header finalizes it and opens the next.
//!
//! It never fails. Unrecognized lines are dropped, a reply without goal headers yields an empty
//! list, and every emitted record has passed through [`AnalysisRecord::finalize`].

use tracing::debug;

use super::lines::{EvidenceSyntax, LineToken, classify};
use crate::models::{AnalysisRecord, ChunkRecord, InterviewRecord, QuotedEvidence, TimestampedEvidence};

enum State<E> {
    SeekingRecord,
    InRecord(AnalysisRecord<E>),
}

/// Parse a reply in the evidence syntax `E`
pub fn parse_response<E: EvidenceSyntax>(text: &str) -> Vec<AnalysisRecord<E>> {
    let mut records = Vec::new();
    let mut state = State::SeekingRecord;
    let mut dropped = 0usize;

    for line in text.lines() {
        let token = classify::<E>(line);

        state = match (state, token) {
            (State::SeekingRecord, LineToken::GoalHeader(label)) => {
                State::InRecord(AnalysisRecord::open(label))
            }
            (State::SeekingRecord, token) => {
                if token != LineToken::Other {
                    dropped += 1;
                }
                State::SeekingRecord
            }
            (State::InRecord(mut record), LineToken::GoalHeader(label)) => {
                record.finalize();
                records.push(record);
                State::InRecord(AnalysisRecord::open(label))
            }
            (State::InRecord(mut record), token) => {
                match token {
                    LineToken::AnswerLine(answer) => record.answer = answer.to_string(),
                    LineToken::EvidenceStart(value) => record.evidence.push(E::start(value)),
                    LineToken::EvidenceContinuation(field, value) => match record.evidence.last_mut() {
                        Some(item) => item.set(field, value),
                        None => dropped += 1,
                    },
                    LineToken::ConfidenceLine(confidence) => {
                        record.confidence = confidence.to_string()
                    }
                    LineToken::EvidenceSection | LineToken::Other | LineToken::GoalHeader(_) => {}
                }
                State::InRecord(record)
            }
        };
    }

    if let State::InRecord(mut record) = state {
        record.finalize();
        records.push(record);
    }

    if dropped > 0 {
        debug!(dropped, records = records.len(), "dropped marker lines outside any record");
    }

    records
}

/// Parse a single-interview reply (timestamped evidence, High/Medium/Low confidence)
pub fn parse_interview_response(text: &str) -> Vec<InterviewRecord> {
    parse_response::<TimestampedEvidence>(text)
}

/// Parse a chunk or synthesis reply (quoted evidence, 0-100 confidence)
pub fn parse_meta_response(text: &str) -> Vec<ChunkRecord> {
    parse_response::<QuotedEvidence>(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Evidence, INSUFFICIENT_ANSWER};

    #[test]
    fn test_record_without_evidence_gets_placeholder() {
        let records = parse_interview_response("[Learning Goal 1]\nAnswer: X\nConfidence: High\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].learning_goal_label, "[Learning Goal 1]");
        assert_eq!(records[0].answer, "X");
        assert_eq!(records[0].confidence, "High");
        assert_eq!(records[0].evidence, vec![TimestampedEvidence::placeholder()]);
    }

    #[test]
    fn test_last_record_finalized_at_end_of_input() {
        let text = "[Learning Goal 1]\nAnswer: first\nConfidence: Medium\n[Learning Goal 2]";
        let records = parse_interview_response(text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].answer, "first");
        assert_eq!(records[1].learning_goal_label, "[Learning Goal 2]");
        assert_eq!(records[1].answer, INSUFFICIENT_ANSWER);
        assert_eq!(records[1].confidence, "Low");
        assert_eq!(records[1].evidence.len(), 1);
    }

    #[test]
    fn test_full_single_mode_block() {
        let text = r#"
Here is my analysis.

[Learning Goal 1: Churn drivers]
Answer: Pricing changes drove them away.
Evidence:
- Timestamp: 00:04:12
  Quote: "The new tier doubled our bill."
  Explanation: Direct statement about cost.
- Timestamp: 00:09:40
  Quote: "We looked at competitors after that."
  Explanation: Shows switching intent.
Confidence: High
"#;
        let records = parse_interview_response(text);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.learning_goal_label, "[Learning Goal 1]");
        assert_eq!(record.evidence.len(), 2);
        assert_eq!(record.evidence[0].timestamp, "00:04:12");
        assert_eq!(record.evidence[0].quote, "The new tier doubled our bill.");
        assert_eq!(record.evidence[1].explanation, "Shows switching intent.");
        assert_eq!(record.confidence, "High");
    }

    #[test]
    fn test_meta_mode_block() {
        let text = "[Learning Goal 3]\nAnswer: Mixed\nEvidence:\n- Quote: \"love it\"\n  Context: Interview 2\n- Quote: \"hate it\"\nConfidence: 55";
        let records = parse_meta_response(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].evidence.len(), 2);
        assert_eq!(records[0].evidence[0].quote, "love it");
        assert_eq!(records[0].evidence[0].context, "Interview 2");
        assert_eq!(records[0].evidence[1].context, "");
        assert_eq!(records[0].confidence, "55");
    }

    #[test]
    fn test_continuation_without_evidence_item_is_dropped() {
        let text = "[Learning Goal 1]\nAnswer: a\nQuote: \"orphan\"\nExplanation: none\nConfidence: Low";
        let records = parse_interview_response(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].evidence, vec![TimestampedEvidence::placeholder()]);
    }

    #[test]
    fn test_no_headers_yields_no_records() {
        assert!(parse_meta_response("").is_empty());
        assert!(parse_meta_response("Answer: floating\nConfidence: 90\n").is_empty());
        assert!(parse_meta_response("Error: model call failed").is_empty());
    }

    #[test]
    fn test_blocks_in_any_order_keep_reply_order() {
        let text = "[Learning Goal 2]\nAnswer: b\n[Learning Goal 1]\nAnswer: a";
        let records = parse_meta_response(text);

        let labels: Vec<&str> = records.iter().map(|r| r.learning_goal_label.as_str()).collect();
        assert_eq!(labels, vec!["[Learning Goal 2]", "[Learning Goal 1]"]);
    }

    #[test]
    fn test_not_enough_data_answer_is_replaced() {
        let records = parse_interview_response("[Learning Goal 1]\nAnswer: Not enough data to answer");
        assert_eq!(records[0].answer, INSUFFICIENT_ANSWER);
    }

    #[test]
    fn test_every_record_is_complete() {
        let text = "junk\n[Learning Goal 1]\n\n[Learning Goal 2]\nConfidence:\n- Timestamp:\n[Learning Goal 3]\nAnswer: ok";
        let records = parse_interview_response(text);

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.is_complete()));
    }

    #[test]
    fn test_rendered_record_parses_back() {
        let text = "[Learning Goal 4]\nAnswer: Onboarding is slow\nEvidence:\n- Quote: \"took weeks\"\n  Context: Interview 1\nConfidence: 72";
        let records = parse_meta_response(text);
        let reparsed = parse_meta_response(&records[0].to_string());

        assert_eq!(reparsed, records);
    }
}
