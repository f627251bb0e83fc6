//! `.agentic-state/current-state.json`: starting point of the agent workflow

use crate::error::{IoResultExt, Result};
use crate::io;
use crate::project::WorkflowType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const STATE_DIR: &str = ".agentic-state";
pub const STATE_FILE: &str = "current-state.json";

/// Phase every new project starts in
pub const INITIAL_PHASE: &str = "initialization";

/// Initialized here, owned afterwards by workflow tooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub current_phase: String,
    pub workflow_type: WorkflowType,
    pub active_agents: BTreeSet<String>,
    pub completed_tasks: Vec<String>,
    pub quality_gates_passed: Vec<String>,
}

impl WorkflowState {
    pub fn initial(workflow_type: WorkflowType) -> Self {
        Self {
            current_phase: INITIAL_PHASE.to_string(),
            workflow_type,
            active_agents: BTreeSet::new(),
            completed_tasks: Vec::new(),
            quality_gates_passed: Vec::new(),
        }
    }

    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(STATE_DIR).join(STATE_FILE)
    }

    pub fn write(&self, project_root: &Path) -> Result<()> {
        io::write_json(&Self::path(project_root), self)
    }

    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);
        let content = std::fs::read_to_string(&path).at_path(&path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
