//! Project description: name, type tag, and where it lands on disk

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported project kinds
///
/// Parsing never fails: a blank tag means the default `web-app`, and
/// unrecognized tags are kept verbatim in `Other` and treated like a custom
/// project that gets only the common layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProjectType {
    #[default]
    WebApp,
    Api,
    Dashboard,
    Microservice,
    DataScience,
    MlModel,
    DataPipeline,
    JupyterNotebook,
    Cli,
    DesktopApp,
    Testing,
    Devops,
    Custom,
    Other(String),
}

impl ProjectType {
    /// Every named type, in wizard menu order
    pub const KNOWN: [ProjectType; 13] = [
        ProjectType::WebApp,
        ProjectType::Api,
        ProjectType::Dashboard,
        ProjectType::Microservice,
        ProjectType::DataScience,
        ProjectType::MlModel,
        ProjectType::DataPipeline,
        ProjectType::JupyterNotebook,
        ProjectType::Cli,
        ProjectType::DesktopApp,
        ProjectType::Testing,
        ProjectType::Devops,
        ProjectType::Custom,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::WebApp => "web-app",
            ProjectType::Api => "api",
            ProjectType::Dashboard => "dashboard",
            ProjectType::Microservice => "microservice",
            ProjectType::DataScience => "data-science",
            ProjectType::MlModel => "ml-model",
            ProjectType::DataPipeline => "data-pipeline",
            ProjectType::JupyterNotebook => "jupyter-notebook",
            ProjectType::Cli => "cli",
            ProjectType::DesktopApp => "desktop-app",
            ProjectType::Testing => "testing",
            ProjectType::Devops => "devops",
            ProjectType::Custom => "custom",
            ProjectType::Other(tag) => tag,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ProjectType::WebApp => "Web Application (Django/Flask/FastAPI)",
            ProjectType::Api => "REST API Service",
            ProjectType::Dashboard => "Data Dashboard (Streamlit)",
            ProjectType::Microservice => "Microservice Architecture",
            ProjectType::DataScience => "Data Science Research",
            ProjectType::MlModel => "ML Model Serving",
            ProjectType::DataPipeline => "Data Pipeline/ETL",
            ProjectType::JupyterNotebook => "Jupyter Notebook Analysis",
            ProjectType::Cli => "CLI Tool",
            ProjectType::DesktopApp => "Desktop Application (PyQt/Tkinter)",
            ProjectType::Testing => "Testing Framework",
            ProjectType::Devops => "DevOps/Infrastructure",
            ProjectType::Custom => "Custom Project Type",
            ProjectType::Other(_) => "Free-form project type",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProjectType::Other(_))
    }

    pub fn workflow_type(&self) -> WorkflowType {
        match self {
            ProjectType::DataScience
            | ProjectType::JupyterNotebook
            | ProjectType::MlModel
            | ProjectType::DataPipeline => WorkflowType::DataScience,
            _ => WorkflowType::Software,
        }
    }
}

impl From<&str> for ProjectType {
    fn from(s: &str) -> Self {
        let tag = s.trim();
        if tag.is_empty() {
            return ProjectType::default();
        }
        Self::KNOWN
            .iter()
            .find(|t| t.as_str() == tag)
            .cloned()
            .unwrap_or_else(|| ProjectType::Other(tag.to_string()))
    }
}

impl FromStr for ProjectType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which agent workflow a project runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowType {
    Software,
    DataScience,
}

impl WorkflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::Software => "software",
            WorkflowType::DataScience => "data-science",
        }
    }

    /// Agents enabled for a new project, in activation order
    pub fn default_agents(&self) -> Vec<String> {
        let specialist = match self {
            WorkflowType::Software => "software-developer-agent",
            WorkflowType::DataScience => "data-scientist-agent",
        };
        ["business-analyst-agent", specialist, "qa-engineer-agent"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to create and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    project_type: ProjectType,
    output_dir: Option<PathBuf>,
}

impl ProjectSpec {
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        output_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        validate_name(&name)?;
        Ok(Self {
            name,
            project_type,
            output_dir,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project_type(&self) -> &ProjectType {
        &self.project_type
    }

    /// Directory the project is created inside (cwd when unset)
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Full path of the project root
    pub fn project_dir(&self) -> PathBuf {
        self.output_dir().join(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::invalid("project name is required"));
    }
    if name == "." || name == ".." {
        return Err(ScaffoldError::invalid(format!(
            "'{}' is not a usable project name",
            name
        )));
    }
    if name.contains(|c: char| c == '/' || c == '\\') || Path::new(name).components().count() != 1 {
        return Err(ScaffoldError::invalid(format!(
            "project name '{}' must not contain path separators",
            name
        )));
    }
    Ok(())
}
