//! Analysis, storage and UI configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

const fn default_token_budget() -> usize {
    100_000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("project_data")
}

const fn default_progress() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Maximum estimated input tokens per chunk.
    #[serde(default = "default_token_budget")]
    pub token_budget: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { token_budget: default_token_budget() }
    }
}

impl AnalysisConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.token_budget == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.token_budget".to_string(),
                reason: "token budget must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `projects.json` and per-project folders.
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Show a spinner while waiting on the model.
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { progress: default_progress() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(AnalysisConfig::default().token_budget, 100_000);
        assert_eq!(StorageConfig::default().data_dir, PathBuf::from("project_data"));
        assert!(UiConfig::default().progress);
    }

    #[test]
    fn zero_budget_is_rejected() {
        let config = AnalysisConfig { token_budget: 0 };
        assert!(config.validate().is_err());
    }
}
