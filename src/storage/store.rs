//! File-backed project store

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use super::results::{read_meta_analysis, write_json_atomic};
use super::{InterviewAnalysis, MetaAnalysisReport, ResultStore, Transcript, TranscriptSource};
use crate::models::{Interview, LearningGoal, Project, ProjectsFile};
use crate::utils::{encode_name, resolve_in_project, safe_open_file};

const PROJECTS_FILENAME: &str = "projects.json";
const ANALYSIS_DIRNAME: &str = "analysis";
const INTERVIEWS_DIRNAME: &str = "interviews";
const META_FILENAME: &str = "meta_analysis.json";

/// Projects, transcripts and results under one data directory
#[derive(Debug, Clone)]
pub struct ProjectStore {
    data_dir: PathBuf,
}

impl ProjectStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join(PROJECTS_FILENAME)
    }

    /// Load `projects.json`; a missing file means no projects yet
    pub fn load_projects(&self) -> Result<ProjectsFile> {
        let path = self.projects_path();
        if !path.exists() {
            debug!(path = %path.display(), "projects file not found, starting empty");
            return Ok(ProjectsFile::default());
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read projects file: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse projects file: {}", path.display()))
    }

    pub fn project(&self, name: &str) -> Result<Project> {
        self.load_projects()?
            .projects
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| anyhow!("Project not found: '{}'", name))
    }

    /// Stored directory if set, otherwise `<data_dir>/<encoded name>`
    pub fn project_dir(&self, project: &Project) -> PathBuf {
        match project.directory.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => self.data_dir.join(encode_name(&project.name)),
        }
    }

    pub fn meta_analysis_path(&self, project: &Project) -> PathBuf {
        self.project_dir(project).join(ANALYSIS_DIRNAME).join(META_FILENAME)
    }

    pub fn interview_analysis_path(&self, project: &Project, interview: &str) -> PathBuf {
        self.project_dir(project)
            .join(ANALYSIS_DIRNAME)
            .join(INTERVIEWS_DIRNAME)
            .join(format!("{}.json", encode_name(interview)))
    }

    /// Last persisted meta-analysis for a project, if any
    pub fn load_meta_analysis(&self, project: &str) -> Result<Option<MetaAnalysisReport>> {
        let project = self.project(project)?;
        read_meta_analysis(&self.meta_analysis_path(&project))
    }

    fn read_transcript(&self, project_dir: &Path, interview: &Interview) -> Result<String> {
        let stored = interview
            .transcript_file
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .ok_or_else(|| anyhow!("no transcript file recorded"))?;
        let path = resolve_in_project(project_dir, stored)?;

        let mut file = safe_open_file(&path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)
            .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
        Ok(text)
    }
}

impl TranscriptSource for ProjectStore {
    fn learning_goals(&self, project: &str) -> Result<Vec<LearningGoal>> {
        Ok(self.project(project)?.goals())
    }

    fn transcripts(&self, project: &str) -> Result<Vec<Transcript>> {
        let project = self.project(project)?;
        let project_dir = self.project_dir(&project);
        let mut transcripts = Vec::with_capacity(project.interviews.len());

        for interview in &project.interviews {
            match self.read_transcript(&project_dir, interview) {
                Ok(text) => {
                    transcripts.push(Transcript { interview: interview.name.clone(), text })
                }
                Err(e) => {
                    warn!(interview = %interview.name, error = %format!("{:#}", e), "skipping interview");
                }
            }
        }

        Ok(transcripts)
    }
}

impl ResultStore for ProjectStore {
    fn save_meta_analysis(&self, report: &MetaAnalysisReport) -> Result<()> {
        let project = self.project(&report.project)?;
        let path = self.meta_analysis_path(&project);
        write_json_atomic(&path, report)?;
        debug!(path = %path.display(), "saved meta-analysis");
        Ok(())
    }

    fn save_interview_analysis(&self, project: &str, analysis: &InterviewAnalysis) -> Result<()> {
        let project = self.project(project)?;
        let path = self.interview_analysis_path(&project, &analysis.interview);
        write_json_atomic(&path, analysis)?;
        debug!(path = %path.display(), "saved interview analysis");
        Ok(())
    }
}
