use super::{GatewayError, ModelGateway};
use crate::utils::progress::with_spinner;

/// Shows a console spinner for the duration of every call to the wrapped gateway
pub struct SpinnerGateway<G> {
    inner: G,
    message: String,
    enabled: bool,
}

impl<G: ModelGateway> SpinnerGateway<G> {
    pub fn new(inner: G, message: impl Into<String>, enabled: bool) -> Self {
        Self { inner, message: message.into(), enabled }
    }
}

impl<G: ModelGateway> ModelGateway for SpinnerGateway<G> {
    fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        with_spinner(&self.message, self.enabled, || self.inner.complete(prompt))
    }
}
