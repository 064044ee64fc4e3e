//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use qr_ai::gateway::{GatewayError, ModelGateway};
use serde_json::json;
use tempfile::TempDir;

/// Builder for creating test data directories with a projects.json
pub struct DataDirBuilder {
    temp_dir: TempDir,
    projects: Vec<serde_json::Value>,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, projects: Vec::new() }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a project with goals and interviews; transcripts are written into the project dir
    pub fn with_project(mut self, project: ProjectBuilder) -> Self {
        let project_dir = self.temp_dir.path().join(qr_ai::utils::encode_name(&project.name));
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        let mut interviews = Vec::new();
        for interview in &project.interviews {
            let mut entry = json!({ "name": interview.name });
            if let Some(file) = &interview.file {
                entry["transcript_file"] = json!(file);
                if let Some(text) = &interview.text {
                    fs::write(project_dir.join(file), text).expect("Failed to write transcript");
                }
            }
            interviews.push(entry);
        }

        self.projects.push(json!({
            "name": project.name,
            "principal_investigator": "Test PI",
            "learning_goals": project.goals,
            "interviews": interviews,
        }));
        self
    }

    /// Write projects.json and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        let content = serde_json::to_string_pretty(&json!({ "projects": self.projects }))
            .expect("Failed to serialize projects");
        fs::write(self.temp_dir.path().join("projects.json"), content)
            .expect("Failed to write projects.json");
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct InterviewEntry {
    name: String,
    file: Option<String>,
    text: Option<String>,
}

/// Builder for one project entry
pub struct ProjectBuilder {
    name: String,
    goals: Vec<String>,
    interviews: Vec<InterviewEntry>,
}

impl ProjectBuilder {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), goals: Vec::new(), interviews: Vec::new() }
    }

    pub fn goal(mut self, goal: &str) -> Self {
        self.goals.push(goal.to_string());
        self
    }

    /// Interview whose transcript file exists with the given text
    pub fn interview(mut self, name: &str, text: &str) -> Self {
        self.interviews.push(InterviewEntry {
            name: name.to_string(),
            file: Some(format!("{}.txt", name)),
            text: Some(text.to_string()),
        });
        self
    }

    /// Interview whose transcript lives in an explicitly named file
    pub fn interview_file(mut self, name: &str, file: &str, text: &str) -> Self {
        self.interviews.push(InterviewEntry {
            name: name.to_string(),
            file: Some(file.to_string()),
            text: Some(text.to_string()),
        });
        self
    }

    /// Interview whose transcript file is recorded but absent on disk
    pub fn missing_interview(mut self, name: &str) -> Self {
        self.interviews.push(InterviewEntry {
            name: name.to_string(),
            file: Some(format!("{}.txt", name)),
            text: None,
        });
        self
    }
}

/// Gateway that replays canned replies in order and records every prompt
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, u16>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self { replies: Mutex::new(VecDeque::new()), prompts: Mutex::new(Vec::new()) }
    }

    /// Queue a successful reply
    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failed call with the given HTTP status
    pub fn fail(self, status: u16) -> Self {
        self.replies.lock().unwrap().push_back(Err(status));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelGateway for ScriptedGateway {
    fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => {
                Err(GatewayError::Status { status, body: "scripted failure".to_string() })
            }
            None => Err(GatewayError::EmptyReply),
        }
    }
}

/// Render a meta-mode block the way a well-behaved model would
pub fn meta_block(index: usize, answer: &str, quote: &str, confidence: u8) -> String {
    format!(
        "[Learning Goal {}]\nAnswer: {}\nEvidence:\n- Quote: \"{}\"\n  Context: test interview\nConfidence: {}\n",
        index, answer, quote, confidence
    )
}

/// Render a single-mode block
pub fn interview_block(index: usize, answer: &str, quote: &str, confidence: &str) -> String {
    format!(
        "[Learning Goal {}]\nAnswer: {}\nEvidence:\n- Timestamp: 00:01:00\n  Quote: \"{}\"\n  Explanation: stated directly\nConfidence: {}\n",
        index, answer, quote, confidence
    )
}

/// A transcript of roughly `tokens` estimated tokens (4 characters each)
pub fn transcript_of_tokens(tokens: usize) -> String {
    "word".repeat(tokens)
}
