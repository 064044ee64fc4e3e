//! Interview analysis pipeline
//!
//! ```text
//! MetaAnalysis::run
//!   ├─ plan_chunks            token-bounded groups of transcripts
//!   ├─ ChunkAnalyzer          one model call per chunk, in order
//!   └─ CrossChunkSynthesizer  one model call per learning goal, in goal order
//! ```
//!
//! Single-interview analysis ([`InterviewAnalyzer`]) bypasses chunking and makes one call per
//! transcript.
//!
//! # Error Handling Strategy
//!
//! - **Model failures**: Converted to the gateway's failure sentinel and logged. The affected
//!   chunk yields no records and the run continues.
//! - **Missing answers**: Every learning goal still receives a finalized record; placeholders
//!   stand in where the model gave nothing usable.
//! - **Storage failures**: Unknown projects, unreadable project files and failed writes
//!   propagate to the caller.
//!
//! Everything runs sequentially on the calling thread. Chunk `i + 1` is analyzed only after
//! chunk `i` returns, and synthesis for one goal finishes before the next begins.

pub mod chunk;
pub mod interview;
pub mod orchestrator;
pub mod synthesis;

pub use chunk::ChunkAnalyzer;
pub use interview::{InterviewAnalyzer, analyze_project_interviews};
pub use orchestrator::{ChunkPlan, MetaAnalysis, plan_project};
pub use synthesis::CrossChunkSynthesizer;
