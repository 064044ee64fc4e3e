//! Cross-chunk synthesis prompt: merge per-chunk answers for one learning goal.

use super::fill_template;
use crate::models::{ChunkRecord, LearningGoal};

/// User prompt template; `{label}`, `{goal}` and `{findings}` are substituted.
pub const SYNTHESIS_USER_TEMPLATE: &str = r#"Several groups of customer interviews were analyzed separately for the same learning goal. Reconcile their findings into one answer.

Learning goal {label}: {goal}

Findings from each group of interviews:
---
{findings}
---

Respond with a single block in exactly this format:

{label}
Answer: <one synthesized answer that reconciles the findings above>
Evidence:
- Quote: "<verbatim quote taken from the findings>"
  Context: <where the quote comes from and why it supports the answer>
Confidence: <a number from 0 to 100>

Rules:
- Include at most three evidence entries, choosing the most relevant ones.
- Put the explanation of each quote in its Context line; do not add a separate Explanation line.
- Weigh findings by their confidence; do not invent quotes.
- If the findings are empty or do not address the learning goal, answer "Not enough data to answer" and give a confidence of 0."#;

const NO_FINDINGS: &str = "(no findings were reported for this learning goal)";

/// Build the prompt that merges all chunk records collected for one goal
pub fn build_synthesis_prompt(goal: &LearningGoal, records: &[&ChunkRecord]) -> String {
    let findings = if records.is_empty() {
        NO_FINDINGS.to_string()
    } else {
        records.iter().map(|r| r.to_string()).collect::<Vec<_>>().join("\n\n")
    };

    fill_template(
        SYNTHESIS_USER_TEMPLATE,
        &[
            ("label", goal.label().as_str()),
            ("goal", goal.content.as_str()),
            ("findings", findings.as_str()),
        ],
    )
}
