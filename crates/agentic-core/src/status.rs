//! Summary of an existing project: how it was created and where its
//! workflow stands

use crate::config::{ProjectConfig, WorkflowState};
use crate::enhancement;
use crate::error::{Result, ScaffoldError};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ProjectStatus {
    pub config: ProjectConfig,
    /// Absent when the project has no state file
    pub state: Option<WorkflowState>,
    pub enhancements: Vec<String>,
}

/// The config of the project rooted at `project_root`.
///
/// Fails with `InvalidInput` when the directory holds no project config.
pub fn load_config(project_root: &Path) -> Result<ProjectConfig> {
    let config_path = ProjectConfig::path(project_root);
    if !config_path.is_file() {
        return Err(ScaffoldError::invalid(format!(
            "no agentic project found in {} (missing {})",
            project_root.display(),
            config_path.display()
        )));
    }
    ProjectConfig::load(project_root)
}

/// Read the status of the project rooted at `project_root`
pub fn load_status(project_root: &Path) -> Result<ProjectStatus> {
    let config = load_config(project_root)?;

    let state = if WorkflowState::path(project_root).is_file() {
        Some(WorkflowState::load(project_root)?)
    } else {
        None
    };

    Ok(ProjectStatus {
        config,
        state,
        enhancements: enhancement::list_enhancements(project_root)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{ProjectSpec, ProjectType, WorkflowType};
    use tempfile::TempDir;

    #[test]
    fn test_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = load_status(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidInput(_)));
    }

    #[test]
    fn test_full_status() {
        let dir = TempDir::new().unwrap();
        let spec = ProjectSpec::new("demo", ProjectType::DataScience, None).unwrap();
        ProjectConfig::new(&spec, "1.0", true).write(dir.path()).unwrap();
        WorkflowState::initial(WorkflowType::DataScience)
            .write(dir.path())
            .unwrap();
        enhancement::create_enhancement(dir.path(), "faster-ba", "d").unwrap();

        let status = load_status(dir.path()).unwrap();
        assert_eq!(status.config.project_name, "demo");
        assert_eq!(status.state.unwrap().current_phase, "initialization");
        assert_eq!(status.enhancements, vec!["faster-ba"]);
    }

    #[test]
    fn test_state_is_optional() {
        let dir = TempDir::new().unwrap();
        let spec = ProjectSpec::new("demo", ProjectType::Api, None).unwrap();
        ProjectConfig::new(&spec, "1.0", false).write(dir.path()).unwrap();

        let status = load_status(dir.path()).unwrap();
        assert!(status.state.is_none());
        assert!(status.enhancements.is_empty());
    }

    #[test]
    fn test_corrupt_config_is_json_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(ProjectConfig::path(dir.path()), "{not json").unwrap();
        assert!(matches!(load_status(dir.path()).unwrap_err(), ScaffoldError::Json(_)));
    }
}
