//! Model gateway error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no API key configured for the model gateway")]
    MissingApiKey,

    /// Connection, TLS, timeout, or body read failure.
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status (auth, quota, rate limit, server error).
    #[error("model API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model API returned an empty reply")]
    EmptyReply,
}
