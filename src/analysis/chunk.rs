use tracing::debug;

use crate::gateway::{ModelGateway, complete_or_sentinel};
use crate::models::{ChunkResult, LearningGoal};
use crate::parsers::parse_meta_response;
use crate::prompts::build_chunk_prompt;

/// Analyzes one chunk of concatenated transcripts against all learning goals
pub struct ChunkAnalyzer<'g, G: ?Sized> {
    gateway: &'g G,
}

impl<'g, G: ModelGateway + ?Sized> ChunkAnalyzer<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    /// Never fails: a failed model call yields an empty result
    pub fn analyze(&self, chunk_text: &str, goals: &[LearningGoal]) -> ChunkResult {
        let prompt = build_chunk_prompt(chunk_text, goals);
        let reply = complete_or_sentinel(self.gateway, &prompt);
        let records = parse_meta_response(&reply);

        if records.len() < goals.len() {
            debug!(parsed = records.len(), expected = goals.len(), "chunk reply skipped some goals");
        }
        records
    }
}
