//! Model gateway configuration.

use serde::{Deserialize, Serialize};

use super::ConfigError;

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_name() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_temperature() -> f32 {
    0.2
}

const fn default_max_tokens() -> u32 {
    4096
}

const fn default_timeout_secs() -> u64 {
    180
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Base URL of an OpenAI-compatible API (`/chat/completions` is appended).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_name")]
    pub name: String,

    /// Bearer token. Falls back to `OPENAI_API_KEY` when empty.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Upper bound on reply length.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-call deadline.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            name: default_name(),
            api_key: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ModelConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Fail unless an API key is available
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.is_configured() {
            Ok(self.api_key.trim())
        } else {
            Err(ConfigError::NotConfigured {
                field: "model.api_key".to_string(),
                hint: "set QRAI_MODEL__API_KEY or OPENAI_API_KEY".to_string(),
            })
        }
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model.endpoint".to_string(),
                reason: "endpoint cannot be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "model.timeout_secs".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}
