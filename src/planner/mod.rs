//! Chunk planning for multi-interview analysis.
//!
//! A project's transcripts routinely exceed the model's input budget, so they are grouped into
//! token-bounded chunks before analysis:
//!
//! - **Estimation**: every transcript gets an estimated token count from a [`TokenEstimator`].
//!   The bundled [`CharRatioEstimator`] divides the character count by four. It is an
//!   approximation, not a tokenizer.
//!
//! - **Planning**: [`plan_chunks`] walks the transcripts once, in order, closing a chunk whenever
//!   the next transcript would push it over budget. No reordering or bin-packing is attempted.
//!
//! - **Oversized transcripts**: a transcript that alone exceeds the budget forms a chunk by
//!   itself. It is never split.

pub mod chunking;
pub mod tokens;

pub use chunking::{Chunk, plan_chunks};
pub use tokens::{CharRatioEstimator, TokenEstimator};
