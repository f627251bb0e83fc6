//! Error types for project bootstrapping

use crate::bootstrap::BootstrapStage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failure after the project directory was created. The directory has
    /// already been removed by the time this is returned.
    #[error("bootstrap failed while {stage}: {source}")]
    Bootstrap {
        stage: BootstrapStage,
        #[source]
        source: Box<ScaffoldError>,
    },

    /// `stderr` keeps git's full output; only its key line is displayed
    #[error("`{command}` failed: {}", stderr_summary(.stderr))]
    VcsCommand { command: String, stderr: String },

    #[error("version control executable not found: {0}")]
    VcsUnavailable(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    RawIo(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl ScaffoldError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The stage a bootstrap failure happened in, if this is one
    pub fn stage(&self) -> Option<BootstrapStage> {
        match self {
            Self::Bootstrap { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Unwrap a bootstrap failure down to its underlying cause
    pub fn root_cause(&self) -> &ScaffoldError {
        match self {
            Self::Bootstrap { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// The line of a tool's stderr worth showing: the `fatal:`/`error:` line if
/// there is one, else the first non-empty line
pub fn stderr_summary(stderr: &str) -> &str {
    let mut lines = stderr.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.clone().next().unwrap_or_default();
    lines
        .find(|l| l.starts_with("fatal:") || l.starts_with("error:"))
        .unwrap_or(first)
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Extension for attaching the offending path to `std::io::Result`
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| ScaffoldError::io(path, e))
    }
}
