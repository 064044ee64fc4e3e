//! Single-interview analysis prompt: High/Medium/Low confidence, timestamped evidence.

use super::{fill_template, render_goals};
use crate::models::LearningGoal;

/// User prompt template; `{goals}` and `{transcript}` are substituted.
pub const INTERVIEW_USER_TEMPLATE: &str = r#"Analyze the following customer interview transcript and answer each learning goal.

Learning goals:
{goals}

Transcript:
---
{transcript}
---

For EACH learning goal, respond with a block in exactly this format:

[Learning Goal <number>]
Answer: <a concise answer grounded in the transcript>
Evidence:
- Timestamp: <HH:MM:SS>
  Quote: "<verbatim quote from the transcript>"
  Explanation: <why this quote supports the answer>
Confidence: <High|Medium|Low>

Rules:
- Use the learning goal numbers exactly as listed above.
- Provide at least one evidence entry per learning goal.
- If the transcript does not address a learning goal, answer "Not enough data to answer" and use Low confidence."#;

/// Build the prompt for analyzing one interview transcript
pub fn build_single_prompt(transcript_text: &str, goals: &[LearningGoal]) -> String {
    fill_template(
        INTERVIEW_USER_TEMPLATE,
        &[("goals", render_goals(goals).as_str()), ("transcript", transcript_text)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_prompt_embeds_goals_and_transcript() {
        let goals = LearningGoal::from_contents(["Why do they churn?"]);
        let prompt = build_single_prompt("Interviewer: hello", &goals);

        assert!(prompt.contains("1. Why do they churn?"));
        assert!(prompt.contains("---\nInterviewer: hello\n---"));
        assert!(prompt.contains("- Timestamp: <HH:MM:SS>"));
        assert!(prompt.contains("Confidence: <High|Medium|Low>"));
        assert!(prompt.contains("at least one evidence entry"));
        assert!(!prompt.contains("{goals}"));
    }

    #[test]
    fn test_single_prompt_keeps_braces_in_goals() {
        let goals = LearningGoal::from_contents(["Is {transcript} ever said aloud?", "Next {goals}"]);
        let prompt = build_single_prompt("Interviewer: hello", &goals);

        assert!(prompt.contains("1. Is {transcript} ever said aloud?\n2. Next {goals}"));
        assert_eq!(prompt.matches("Interviewer: hello").count(), 1);
    }
}
