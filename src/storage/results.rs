//! Persisted analysis results

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{InterviewRecord, SynthesizedRecord};

/// Result schema version for invalidation on format changes
pub const RESULTS_VERSION: u32 = 1;

/// Output of one meta-analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaAnalysisReport {
    pub version: u32,
    pub project: String,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub token_budget: usize,
    pub interview_count: usize,
    pub chunk_count: usize,
    pub results: Vec<SynthesizedRecord>,
}

impl MetaAnalysisReport {
    pub fn new(
        project: impl Into<String>,
        token_budget: usize,
        interview_count: usize,
        chunk_count: usize,
        results: Vec<SynthesizedRecord>,
    ) -> Self {
        Self {
            version: RESULTS_VERSION,
            project: project.into(),
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            token_budget,
            interview_count,
            chunk_count,
            results,
        }
    }
}

/// Output of analyzing one interview on its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewAnalysis {
    pub interview: String,
    pub generated_at: DateTime<Utc>,
    pub records: Vec<InterviewRecord>,
}

impl InterviewAnalysis {
    pub fn new(interview: impl Into<String>, records: Vec<InterviewRecord>) -> Self {
        Self { interview: interview.into(), generated_at: Utc::now(), records }
    }
}

/// Write JSON atomically (temp file + rename)
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let json = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("Failed to move results into place: {}", path.display()))?;

    Ok(())
}

/// Load a previously written meta-analysis, `None` if absent
pub(crate) fn read_meta_analysis(path: &Path) -> Result<Option<MetaAnalysisReport>> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results file: {}", path.display()))?;
    let report: MetaAnalysisReport = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse results file: {}", path.display()))?;
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_then_read_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("analysis").join("meta_analysis.json");
        let report = MetaAnalysisReport::new(
            "churn",
            1000,
            3,
            2,
            vec![SynthesizedRecord::placeholder("[Learning Goal 1]")],
        );

        write_json_atomic(&path, &report).unwrap();
        assert!(!dir.path().join("analysis").join("meta_analysis.json.tmp").exists());

        let loaded = read_meta_analysis(&path).unwrap().unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn test_read_missing_report() {
        let dir = TempDir::new().unwrap();
        assert!(read_meta_analysis(&dir.path().join("none.json")).unwrap().is_none());
    }

    #[test]
    fn test_read_corrupted_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("meta_analysis.json");
        fs::write(&path, "{not json").unwrap();
        let err = read_meta_analysis(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse results file"));
    }
}
