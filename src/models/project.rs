use serde::{Deserialize, Serialize};

use super::goal::LearningGoal;

/// Top-level layout of `projects.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsFile {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub directory: Option<String>,
    #[serde(default)]
    pub principal_investigator: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_learning_goals")]
    pub learning_goals: Vec<String>,
    #[serde(default)]
    pub interviews: Vec<Interview>,
}

impl Project {
    /// Learning goals numbered in stored order
    pub fn goals(&self) -> Vec<LearningGoal> {
        LearningGoal::from_contents(self.learning_goals.iter().cloned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub name: String,
    #[serde(default)]
    pub interviewee: Option<String>,
    #[serde(default)]
    pub interviewer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "vtt_file")]
    pub transcript_file: Option<String>,
}
