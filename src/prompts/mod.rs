//! Prompt templates for interview analysis.
//!
//! Every prompt embeds the numbered learning goals and spells out the line grammar the response
//! parser accepts. Templates are `{placeholder}` substitutions filled in a single pass, so goal and
//! transcript text is embedded literally even when it contains placeholder-like braces.

pub mod chunk;
pub mod interview;
pub mod synthesis;

pub use chunk::{CHUNK_USER_TEMPLATE, build_chunk_prompt};
pub use interview::{INTERVIEW_USER_TEMPLATE, build_single_prompt};
pub use synthesis::{SYNTHESIS_USER_TEMPLATE, build_synthesis_prompt};

use crate::models::LearningGoal;

/// System instruction shared by every analysis call.
pub const ANALYST_SYSTEM: &str = "You are a qualitative research analyst. You answer a researcher's \
learning goals strictly from customer interview transcripts, quote the interviewees verbatim, \
and follow the requested output format exactly.";

/// Render goals as `"<index>. <content>"` lines
pub fn render_goals(goals: &[LearningGoal]) -> String {
    goals.iter().map(|g| g.to_string()).collect::<Vec<_>>().join("\n")
}

/// Fill `{name}` placeholders in one left-to-right pass
///
/// Inserted values are never rescanned. Braces that do not open a known placeholder are copied
/// through unchanged.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let inserted: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + inserted);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let matched = values.iter().find_map(|(name, value)| {
            tail.strip_prefix('{')
                .and_then(|t| t.strip_prefix(*name))
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match matched {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template("{a} then {b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(filled, "{b} then x");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let filled = fill_template("{ json } {missing} {a}", &[("a", "1")]);
        assert_eq!(filled, "{ json } {missing} 1");
    }

    #[test]
    fn test_render_goals() {
        let goals = LearningGoal::from_contents(["Why churn?", "What price?"]);
        assert_eq!(render_goals(&goals), "1. Why churn?\n2. What price?");
    }

    #[test]
    fn test_render_no_goals() {
        assert_eq!(render_goals(&[]), "");
    }
}
