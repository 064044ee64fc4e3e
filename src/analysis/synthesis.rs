use std::collections::HashSet;

use tracing::{debug, warn};

use crate::gateway::{ModelGateway, complete_or_sentinel};
use crate::models::{ChunkRecord, ChunkResult, LearningGoal, SynthesizedRecord};
use crate::parsers::parse_meta_response;
use crate::prompts::build_synthesis_prompt;

/// Merges per-chunk records into one record per learning goal
pub struct CrossChunkSynthesizer<'g, G: ?Sized> {
    gateway: &'g G,
}

impl<'g, G: ModelGateway + ?Sized> CrossChunkSynthesizer<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    /// One output per goal, in goal order, each labelled `[Learning Goal {index}]`
    ///
    /// Records join to goals by exact label. A goal with no matching records is still
    /// synthesized from an empty collection, and a reply with no parsable block becomes a
    /// placeholder record.
    pub fn synthesize(
        &self,
        chunk_results: &[ChunkResult],
        goals: &[LearningGoal],
    ) -> Vec<SynthesizedRecord> {
        warn_unmatched_labels(chunk_results, goals);

        goals
            .iter()
            .map(|goal| {
                let label = goal.label();
                let collected: Vec<&ChunkRecord> = chunk_results
                    .iter()
                    .flatten()
                    .filter(|record| record.learning_goal_label == label)
                    .collect();
                debug!(goal = %label, records = collected.len(), "synthesizing learning goal");

                self.synthesize_goal(goal, &collected)
            })
            .collect()
    }

    fn synthesize_goal(&self, goal: &LearningGoal, collected: &[&ChunkRecord]) -> SynthesizedRecord {
        let label = goal.label();
        let prompt = build_synthesis_prompt(goal, collected);
        let reply = complete_or_sentinel(self.gateway, &prompt);

        match parse_meta_response(&reply).into_iter().next() {
            Some(mut record) => {
                record.learning_goal_label = label;
                record
            }
            None => {
                warn!(goal = %label, "synthesis reply had no learning goal block, using placeholder");
                SynthesizedRecord::placeholder(label)
            }
        }
    }
}

fn warn_unmatched_labels(chunk_results: &[ChunkResult], goals: &[LearningGoal]) {
    let known: HashSet<String> = goals.iter().map(LearningGoal::label).collect();
    for record in chunk_results.iter().flatten() {
        if !known.contains(&record.learning_goal_label) {
            warn!(
                label = %record.learning_goal_label,
                "chunk record does not match any learning goal and will be ignored"
            );
        }
    }
}
