//! QR-AI - Answer research learning goals from customer interview transcripts
//!
//! This library analyzes interview transcripts with a large language model. Because a single
//! transcript, or a whole project, routinely exceeds the model's input budget, it:
//!
//! - Groups transcripts into token-bounded chunks ([`planner`])
//! - Asks the model to answer every learning goal per chunk ([`prompts`], [`gateway`])
//! - Parses the free-text replies into complete records ([`parsers`])
//! - Merges per-chunk answers into one synthesized answer per learning goal ([`analysis`])
//! - Persists the results next to the project's transcripts ([`storage`])
//!
//! # Example
//!
//! ```no_run
//! use qr_ai::analysis::MetaAnalysis;
//! use qr_ai::config::QraiConfig;
//! use qr_ai::gateway::OpenAiGateway;
//! use qr_ai::storage::ProjectStore;
//!
//! let config = QraiConfig::load()?;
//! let gateway = OpenAiGateway::new(&config.model)?;
//! let store = ProjectStore::new("project_data");
//!
//! let results = MetaAnalysis::new(&gateway, config.analysis.clone()).run(&store, "churn-study")?;
//! for record in &results {
//!     println!("{}: {} (confidence {})", record.learning_goal_label, record.answer, record.confidence);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod models;
pub mod parsers;
pub mod planner;
pub mod prompts;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use analysis::{ChunkAnalyzer, CrossChunkSynthesizer, InterviewAnalyzer, MetaAnalysis};
pub use gateway::{FAILURE_SENTINEL, ModelGateway};
pub use models::{AnalysisRecord, LearningGoal, SynthesizedRecord, TranscriptUnit};
pub use parsers::{parse_interview_response, parse_meta_response};
pub use planner::{Chunk, plan_chunks};
pub use storage::ProjectStore;
