//! Multi-interview chunk prompt: 0-100 confidence, at least three quoted evidence entries.

use super::{fill_template, render_goals};
use crate::models::LearningGoal;

/// User prompt template; `{goals}` and `{transcripts}` are substituted.
pub const CHUNK_USER_TEMPLATE: &str = r#"Analyze the following set of customer interview transcripts together and answer each learning goal across all of them.

Learning goals:
{goals}

Transcripts:
---
{transcripts}
---

For EACH learning goal, respond with a block in exactly this format:

[Learning Goal <number>]
Answer: <an answer that reflects the interviews as a group>
Evidence:
- Quote: "<verbatim quote>"
  Context: <which interview it comes from and what was being discussed>
Confidence: <a number from 0 to 100>

Rules:
- Use the learning goal numbers exactly as listed above.
- Provide at least three evidence entries per learning goal, drawn from different interviews where possible.
- If the transcripts do not address a learning goal, answer "Not enough data to answer" and give a low confidence."#;

/// Build the prompt for analyzing a chunk of concatenated transcripts
pub fn build_chunk_prompt(concatenated_transcripts: &str, goals: &[LearningGoal]) -> String {
    fill_template(
        CHUNK_USER_TEMPLATE,
        &[("goals", render_goals(goals).as_str()), ("transcripts", concatenated_transcripts)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_prompt_requests_meta_grammar() {
        let goals = LearningGoal::from_contents(["Pricing", "Onboarding"]);
        let prompt = build_chunk_prompt("=== Interview 1: a ===\nhi", &goals);

        assert!(prompt.contains("1. Pricing\n2. Onboarding"));
        assert!(prompt.contains("=== Interview 1: a ===\nhi"));
        assert!(prompt.contains("- Quote: \"<verbatim quote>\""));
        assert!(prompt.contains("Confidence: <a number from 0 to 100>"));
        assert!(prompt.contains("at least three evidence entries"));
        assert!(!prompt.contains("Timestamp"));
    }

    #[test]
    fn test_chunk_prompt_keeps_braces_in_goals() {
        let goals = LearningGoal::from_contents(["Do users template with {transcripts} placeholders?"]);
        let prompt = build_chunk_prompt("=== Interview 1: a ===\nhi", &goals);

        assert!(prompt.contains("1. Do users template with {transcripts} placeholders?"));
        assert_eq!(prompt.matches("=== Interview 1: a ===").count(), 1);
    }
}
