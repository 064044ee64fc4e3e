//! Model gateway: the single seam between the analysis pipeline and the LLM service.
//!
//! Gateways return typed errors, but the analyzers never propagate them. A failed call is
//! logged and replaced by [`FAILURE_SENTINEL`], which the response parser reads as zero
//! records, so one bad call degrades a chunk instead of aborting the run.

pub mod error;
pub mod openai;
pub mod spinner;

pub use error::GatewayError;
pub use openai::OpenAiGateway;
pub use spinner::SpinnerGateway;

use tracing::warn;

/// Text substituted for a failed model call. Contains no goal header.
pub const FAILURE_SENTINEL: &str = "Error: the language model request failed.";

/// Sends one prompt to a language model and returns its raw reply
pub trait ModelGateway {
    fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}

impl<G: ModelGateway + ?Sized> ModelGateway for &G {
    fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        (**self).complete(prompt)
    }
}

impl<G: ModelGateway + ?Sized> ModelGateway for Box<G> {
    fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        (**self).complete(prompt)
    }
}

/// Call the gateway, converting any failure into [`FAILURE_SENTINEL`]
pub fn complete_or_sentinel<G: ModelGateway + ?Sized>(gateway: &G, prompt: &str) -> String {
    match gateway.complete(prompt) {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "model call failed, continuing with degraded results");
            FAILURE_SENTINEL.to_string()
        }
    }
}
