use std::collections::HashMap;

use anyhow::Result;
use tracing::{info, warn};

use crate::gateway::{ModelGateway, complete_or_sentinel};
use crate::models::{InterviewRecord, LearningGoal};
use crate::parsers::parse_interview_response;
use crate::prompts::build_single_prompt;
use crate::storage::{InterviewAnalysis, ResultStore, TranscriptSource};

/// Analyzes one interview transcript on its own
pub struct InterviewAnalyzer<'g, G: ?Sized> {
    gateway: &'g G,
}

impl<'g, G: ModelGateway + ?Sized> InterviewAnalyzer<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    pub fn analyze(&self, transcript_text: &str, goals: &[LearningGoal]) -> Vec<InterviewRecord> {
        let prompt = build_single_prompt(transcript_text, goals);
        let reply = complete_or_sentinel(self.gateway, &prompt);
        parse_interview_response(&reply)
    }
}

/// Analyze every readable interview of a project (or only `only_interview`) and persist each
///
/// Interviews are processed in stored order, one model call each. A repeated interview name is
/// stored as `"<name> (n)"` so its result does not overwrite an earlier one.
pub fn analyze_project_interviews<G, S>(
    gateway: &G,
    store: &S,
    project: &str,
    only_interview: Option<&str>,
) -> Result<Vec<InterviewAnalysis>>
where
    G: ModelGateway + ?Sized,
    S: TranscriptSource + ResultStore + ?Sized,
{
    let goals = store.learning_goals(project)?;
    if goals.is_empty() {
        warn!(project, "project has no learning goals");
    }

    let analyzer = InterviewAnalyzer::new(gateway);
    let mut analyses = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for transcript in store.transcripts(project)? {
        if only_interview.is_some_and(|name| name != transcript.interview) {
            continue;
        }

        info!(interview = %transcript.interview, "analyzing interview");
        let records = analyzer.analyze(&transcript.text, &goals);
        if records.is_empty() {
            warn!(interview = %transcript.interview, "model reply contained no learning goal blocks");
        }

        let occurrence = seen.entry(transcript.interview.clone()).or_insert(0);
        *occurrence += 1;
        let key = if *occurrence == 1 {
            transcript.interview
        } else {
            let key = format!("{} ({})", transcript.interview, occurrence);
            warn!(interview = %transcript.interview, stored_as = %key, "interview name repeats");
            key
        };

        let analysis = InterviewAnalysis::new(key, records);
        store.save_interview_analysis(project, &analysis)?;
        analyses.push(analysis);
    }

    Ok(analyses)
}
