//! `config/agentic-config.json`: what a project was created as

use crate::error::{IoResultExt, Result};
use crate::io;
use crate::project::{ProjectSpec, WorkflowType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE: &str = "agentic-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentsConfig {
    pub enabled: Vec<String>,
    pub workflow_type: WorkflowType,
}

/// Written once at creation; this crate never updates it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub project_type: String,
    pub framework_version: String,
    /// RFC 3339 timestamp
    pub created_date: String,
    pub use_submodule: bool,
    pub agents: AgentsConfig,
}

impl ProjectConfig {
    pub fn new(spec: &ProjectSpec, framework_version: &str, use_submodule: bool) -> Self {
        let workflow_type = spec.project_type().workflow_type();
        Self {
            project_name: spec.name().to_string(),
            project_type: spec.project_type().as_str().to_string(),
            framework_version: framework_version.to_string(),
            created_date: chrono::Local::now().to_rfc3339(),
            use_submodule,
            agents: AgentsConfig {
                enabled: workflow_type.default_agents(),
                workflow_type,
            },
        }
    }

    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn write(&self, project_root: &Path) -> Result<()> {
        io::write_json(&Self::path(project_root), self)
    }

    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);
        let content = std::fs::read_to_string(&path).at_path(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `YYYY-MM-DD` part of the creation timestamp
    pub fn created_day(&self) -> &str {
        self.created_date.get(..10).unwrap_or(&self.created_date)
    }
}
