use anyhow::Result;
use tracing::{info, warn};

use super::{ChunkAnalyzer, CrossChunkSynthesizer};
use crate::config::AnalysisConfig;
use crate::gateway::ModelGateway;
use crate::models::{ChunkResult, LearningGoal, SynthesizedRecord, TranscriptUnit};
use crate::planner::{CharRatioEstimator, Chunk, TokenEstimator, plan_chunks};
use crate::storage::{MetaAnalysisReport, ResultStore, TranscriptSource};

/// Chunks for a project together with the inputs they were planned from
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    pub goals: Vec<LearningGoal>,
    pub token_budget: usize,
    pub interview_count: usize,
    pub chunks: Vec<Chunk>,
}

impl ChunkPlan {
    pub fn oversized_chunks(&self) -> usize {
        self.chunks.iter().filter(|c| c.is_oversized_singleton(self.token_budget)).count()
    }
}

/// Load a project's goals and transcripts and group the transcripts into chunks
///
/// Needs no model access, so it also backs previews of how a run would be split.
pub fn plan_project<S: TranscriptSource + ?Sized>(
    source: &S,
    project: &str,
    token_budget: usize,
    estimator: &dyn TokenEstimator,
) -> Result<ChunkPlan> {
    let goals = source.learning_goals(project)?;
    let units: Vec<TranscriptUnit> = source
        .transcripts(project)?
        .into_iter()
        .enumerate()
        .map(|(i, t)| TranscriptUnit::estimated(i + 1, t.interview, t.text, estimator))
        .collect();
    let interview_count = units.len();
    let chunks = plan_chunks(units, token_budget);

    let plan = ChunkPlan { goals, token_budget, interview_count, chunks };
    info!(
        project,
        interviews = plan.interview_count,
        chunks = plan.chunks.len(),
        token_budget,
        "planned chunks"
    );
    let oversized = plan.oversized_chunks();
    if oversized > 0 {
        warn!(
            project,
            oversized, "some transcripts exceed the token budget on their own and are analyzed alone"
        );
    }
    Ok(plan)
}

/// Drives a full meta-analysis for one project
pub struct MetaAnalysis<'g, G: ?Sized> {
    gateway: &'g G,
    config: AnalysisConfig,
    estimator: Box<dyn TokenEstimator>,
}

impl<'g, G: ModelGateway + ?Sized> MetaAnalysis<'g, G> {
    pub fn new(gateway: &'g G, config: AnalysisConfig) -> Self {
        Self { gateway, config, estimator: Box::new(CharRatioEstimator) }
    }

    pub fn with_estimator(mut self, estimator: Box<dyn TokenEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load goals and transcripts and group the transcripts into chunks
    pub fn plan<S: TranscriptSource + ?Sized>(&self, source: &S, project: &str) -> Result<ChunkPlan> {
        plan_project(source, project, self.config.token_budget, self.estimator.as_ref())
    }

    /// Plan, analyze every chunk in order, synthesize per goal, persist, and return the results
    pub fn run<S>(&self, store: &S, project: &str) -> Result<Vec<SynthesizedRecord>>
    where
        S: TranscriptSource + ResultStore + ?Sized,
    {
        let plan = self.plan(store, project)?;
        if plan.goals.is_empty() {
            warn!(project, "project has no learning goals");
        }

        let analyzer = ChunkAnalyzer::new(self.gateway);
        let mut chunk_results: Vec<ChunkResult> = Vec::with_capacity(plan.chunks.len());
        for (i, chunk) in plan.chunks.iter().enumerate() {
            info!(
                chunk = i + 1,
                of = plan.chunks.len(),
                interviews = chunk.len(),
                tokens = chunk.total_tokens(),
                "analyzing chunk"
            );
            let result = analyzer.analyze(&chunk.text(), &plan.goals);
            if result.is_empty() {
                warn!(chunk = i + 1, "chunk analysis produced no records");
            }
            chunk_results.push(result);
        }

        let synthesized =
            CrossChunkSynthesizer::new(self.gateway).synthesize(&chunk_results, &plan.goals);

        let report = MetaAnalysisReport::new(
            project,
            plan.token_budget,
            plan.interview_count,
            plan.chunks.len(),
            synthesized,
        );
        store.save_meta_analysis(&report)?;

        Ok(report.results)
    }
}
