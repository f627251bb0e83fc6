//! Linking a new project to the framework source
//!
//! A project references the framework either as a git submodule, which keeps
//! its own history and can be updated later, or as a flat copy. The submodule
//! is attempted first when preferred. Any failure there downgrades to a copy
//! instead of failing the bootstrap.

use crate::error::{IoResultExt, Result};
use crate::templates::copier;
use crate::vcs::VersionControl;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Where the framework lives inside every project
pub const FRAMEWORK_DIR: &str = ".agentic-framework";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Submodule,
    Copy,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkKind::Submodule => f.write_str("submodule"),
            LinkKind::Copy => f.write_str("copy"),
        }
    }
}

/// Which linkage a project ended up with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStrategyResult {
    pub kind: LinkKind,
    /// Absolute framework path, forward slashes on every platform
    pub source: String,
    pub used_fallback: bool,
    /// Why the submodule attempt was abandoned
    pub fallback_reason: Option<String>,
}

impl LinkStrategyResult {
    pub fn is_submodule(&self) -> bool {
        self.kind == LinkKind::Submodule
    }
}

/// Absolute form of `path` with forward slashes
pub fn normalize_source(path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path).at_path(path)?;
    Ok(absolute.to_string_lossy().replace('\\', "/"))
}

pub struct FrameworkLinker<'a, V: VersionControl> {
    vcs: &'a V,
}

impl<'a, V: VersionControl> FrameworkLinker<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        Self { vcs }
    }

    /// Link `framework_source` into `project_root/.agentic-framework`.
    ///
    /// Exactly one of submodule or copy exists there afterwards.
    pub fn link(
        &self,
        framework_source: &Path,
        project_root: &Path,
        prefer_submodule: bool,
    ) -> Result<LinkStrategyResult> {
        let source = normalize_source(framework_source)?;

        if !prefer_submodule {
            self.copy_framework(framework_source, project_root)?;
            return Ok(LinkStrategyResult {
                kind: LinkKind::Copy,
                source,
                used_fallback: false,
                fallback_reason: None,
            });
        }

        match self.vcs.add_submodule(project_root, &source, FRAMEWORK_DIR) {
            Ok(()) => {
                info!(source = %source, "framework linked as submodule");
                Ok(LinkStrategyResult {
                    kind: LinkKind::Submodule,
                    source,
                    used_fallback: false,
                    fallback_reason: None,
                })
            }
            Err(err) => {
                let reason = err.to_string();
                warn!(error = %reason, "submodule setup failed, falling back to copy");
                scrub_partial_submodule(project_root)?;
                self.copy_framework(framework_source, project_root)?;
                Ok(LinkStrategyResult {
                    kind: LinkKind::Copy,
                    source,
                    used_fallback: true,
                    fallback_reason: Some(reason),
                })
            }
        }
    }

    fn copy_framework(&self, framework_source: &Path, project_root: &Path) -> Result<()> {
        let copied = copier::copy_tree(framework_source, &project_root.join(FRAMEWORK_DIR))?;
        info!(files = copied.len(), "framework copied into project");
        Ok(())
    }
}

/// Remove whatever a failed `git submodule add` left behind
fn scrub_partial_submodule(project_root: &Path) -> Result<()> {
    for dir in [
        project_root.join(FRAMEWORK_DIR),
        project_root.join(".git").join("modules").join(FRAMEWORK_DIR),
    ] {
        if dir.is_dir() {
            fs::remove_dir_all(&dir).at_path(&dir)?;
        } else if dir.exists() {
            fs::remove_file(&dir).at_path(&dir)?;
        }
    }
    let gitmodules = project_root.join(".gitmodules");
    if gitmodules.exists() {
        fs::remove_file(&gitmodules).at_path(&gitmodules)?;
    }
    Ok(())
}
