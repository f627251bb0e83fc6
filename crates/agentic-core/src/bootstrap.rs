//! Project bootstrapping
//!
//! Creating a project runs through fixed stages:
//!
//! ```text
//! Validating -> Creating -> Linking -> LayoutBuilding -> ConfigWriting -> Snapshotting -> Done
//! ```
//!
//! Validating has no side effects. A failure in any later stage removes the
//! project directory again and is reported as [`ScaffoldError::Bootstrap`]
//! naming the stage. A directory that existed before the call is never
//! touched.

use crate::config::{generator, ProjectConfig, WorkflowState};
use crate::error::{IoResultExt, Result, ScaffoldError};
use crate::link::{FrameworkLinker, LinkStrategyResult};
use crate::project::ProjectSpec;
use crate::templates::{self, FrameworkManifest, TemplateContext};
use crate::vcs::{GitCli, VersionControl};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStage {
    Validating,
    Creating,
    Linking,
    LayoutBuilding,
    ConfigWriting,
    Snapshotting,
    Done,
}

impl fmt::Display for BootstrapStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BootstrapStage::Validating => "validating",
            BootstrapStage::Creating => "creating the project directory",
            BootstrapStage::Linking => "linking the framework",
            BootstrapStage::LayoutBuilding => "building the layout",
            BootstrapStage::ConfigWriting => "writing configuration",
            BootstrapStage::Snapshotting => "recording the initial commit",
            BootstrapStage::Done => "done",
        };
        f.write_str(text)
    }
}

/// Engine settings shared by every project a bootstrapper creates
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Directory holding the agentic framework
    pub framework_source: PathBuf,
    /// Try a git submodule before falling back to a copy
    pub prefer_submodule: bool,
    /// Compared against the framework's `min_cli_version`
    pub cli_version: String,
    /// Shown in version warnings
    pub upgrade_command: String,
}

impl BootstrapConfig {
    pub fn new(framework_source: impl Into<PathBuf>) -> Self {
        Self {
            framework_source: framework_source.into(),
            prefer_submodule: true,
            cli_version: crate::DEFAULT_CLI_VERSION.to_string(),
            upgrade_command: "cargo install agentic-tools --force".to_string(),
        }
    }

    pub fn prefer_submodule(mut self, prefer: bool) -> Self {
        self.prefer_submodule = prefer;
        self
    }

    pub fn cli_version(mut self, version: impl Into<String>) -> Self {
        self.cli_version = version.into();
        self
    }

    pub fn upgrade_command(mut self, command: impl Into<String>) -> Self {
        self.upgrade_command = command.into();
        self
    }
}

/// A successfully created project
#[derive(Debug, Clone)]
pub struct BootstrapOutcome {
    pub root: PathBuf,
    pub link: LinkStrategyResult,
    pub config: ProjectConfig,
    /// Non-fatal problems: version mismatches, submodule fallback
    pub warnings: Vec<String>,
}

/// Message of the single commit every new project starts with
pub fn initial_commit_message(project_name: &str) -> String {
    format!("Initial setup: {} with agentic SDLC framework", project_name)
}

pub struct ProjectBootstrapper<V: VersionControl = GitCli> {
    config: BootstrapConfig,
    vcs: V,
}

impl ProjectBootstrapper<GitCli> {
    pub fn with_git(config: BootstrapConfig) -> Self {
        Self::new(config, GitCli::default())
    }
}

/// Where a running bootstrap has got to
struct Progress {
    stage: BootstrapStage,
    created_root: bool,
}

impl Progress {
    fn enter(&mut self, stage: BootstrapStage) {
        debug!(stage = ?stage, "Entering bootstrap stage");
        self.stage = stage;
    }
}

impl<V: VersionControl> ProjectBootstrapper<V> {
    pub fn new(config: BootstrapConfig, vcs: V) -> Self {
        Self { config, vcs }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Create the project described by `spec`.
    ///
    /// On error nothing created by this call is left on disk.
    pub fn create(&self, spec: &ProjectSpec) -> Result<BootstrapOutcome> {
        let root = spec.project_dir();
        let (manifest, mut warnings) = self.validate(spec, &root)?;

        let mut progress = Progress {
            stage: BootstrapStage::Validating,
            created_root: false,
        };

        match self.run_stages(spec, &root, &manifest, &mut progress) {
            Ok((link, config)) => {
                progress.enter(BootstrapStage::Done);
                if let Some(reason) = &link.fallback_reason {
                    warnings.push(format!(
                        "Framework copied instead of linked as a submodule: {}",
                        reason
                    ));
                }
                info!(root = %root.display(), link = %link.kind, "Project created");
                Ok(BootstrapOutcome {
                    root,
                    link,
                    config,
                    warnings,
                })
            }
            Err(source) => {
                if progress.created_root {
                    rollback(&root);
                }
                Err(ScaffoldError::Bootstrap {
                    stage: progress.stage,
                    source: Box::new(source),
                })
            }
        }
    }

    /// Check preconditions and load the framework manifest
    fn validate(&self, spec: &ProjectSpec, root: &Path) -> Result<(FrameworkManifest, Vec<String>)> {
        debug!(stage = ?BootstrapStage::Validating, "Entering bootstrap stage");

        if root.symlink_metadata().is_ok() {
            return Err(ScaffoldError::AlreadyExists(root.to_path_buf()));
        }

        let source = &self.config.framework_source;
        if !source.is_dir() {
            return Err(ScaffoldError::invalid(format!(
                "framework source not found: {}",
                source.display()
            )));
        }

        let output_dir = spec.output_dir();
        if !output_dir.is_dir() {
            return Err(ScaffoldError::invalid(format!(
                "output directory does not exist: {}",
                output_dir.display()
            )));
        }

        let manifest = FrameworkManifest::load(source)?;
        let mut warnings = Vec::new();
        if let Some(min) = &manifest.min_cli_version {
            if let Some(warning) = templates::check_compatibility(
                &self.config.cli_version,
                min,
                &self.config.upgrade_command,
            ) {
                warn!(required = %min, running = %self.config.cli_version, "CLI older than framework expects");
                warnings.push(warning);
            }
        }

        Ok((manifest, warnings))
    }

    fn run_stages(
        &self,
        spec: &ProjectSpec,
        root: &Path,
        manifest: &FrameworkManifest,
        progress: &mut Progress,
    ) -> Result<(LinkStrategyResult, ProjectConfig)> {
        progress.enter(BootstrapStage::Creating);
        // Non-recursive: the output directory must already exist
        fs::create_dir(root).at_path(root)?;
        progress.created_root = true;
        self.vcs.init(root)?;

        progress.enter(BootstrapStage::Linking);
        let link = FrameworkLinker::new(&self.vcs).link(
            &self.config.framework_source,
            root,
            self.config.prefer_submodule,
        )?;

        progress.enter(BootstrapStage::LayoutBuilding);
        let ctx = TemplateContext::new(spec.name(), spec.project_type().as_str());
        let layout = templates::layout_for(spec.project_type());
        let generated = templates::materialize(&layout, root, &ctx)?;
        info!(files = generated.len(), "Layout built");

        progress.enter(BootstrapStage::ConfigWriting);
        let config = ProjectConfig::new(spec, &manifest.version, link.is_submodule());
        config.write(root)?;
        let workflow = config.agents.workflow_type;
        WorkflowState::initial(workflow).write(root)?;
        generator::write_documents(
            root,
            &ctx,
            workflow,
            link.kind,
            &manifest.brief_template_path(&self.config.framework_source),
        )?;

        progress.enter(BootstrapStage::Snapshotting);
        self.vcs.stage_all(root)?;
        self.vcs.commit(root, &initial_commit_message(spec.name()))?;

        Ok((link, config))
    }
}

/// Best-effort removal of a partially created project
fn rollback(root: &Path) {
    match fs::remove_dir_all(root) {
        Ok(()) => info!(root = %root.display(), "Rolled back partial project"),
        Err(e) => warn!(root = %root.display(), error = %e, "Failed to remove partial project"),
    }
}
