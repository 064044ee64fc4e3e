//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QRAI_*` prefix, `__` as separator)
//! 2. Project-level `./qrai.toml`
//! 3. User-level `~/.config/qr-ai/config.toml`
//! 4. Built-in defaults
//!
//! `QRAI_MODEL__API_KEY` maps to `model.api_key`, `QRAI_ANALYSIS__TOKEN_BUDGET` to
//! `analysis.token_budget`, and so on. When no API key is configured, `OPENAI_API_KEY` is used.
//!
//! ```no_run
//! use qr_ai::config::QraiConfig;
//!
//! let config = QraiConfig::load()?;
//! println!("token budget: {}", config.analysis.token_budget);
//! # Ok::<(), qr_ai::config::ConfigError>(())
//! ```

mod analysis;
mod error;
mod model;

pub use analysis::{AnalysisConfig, StorageConfig, UiConfig};
pub use error::ConfigError;
pub use model::ModelConfig;

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "QRAI_";
const LOCAL_CONFIG_FILE: &str = "qrai.toml";
const FALLBACK_API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QraiConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl QraiConfig {
    /// Load configuration from all sources and validate it
    pub fn load() -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment().extract()?;

        if !config.model.is_configured()
            && let Ok(key) = std::env::var(FALLBACK_API_KEY_VAR)
        {
            config.model.api_key = key;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        self.analysis.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qr-ai").join("config.toml"))
    }
}
