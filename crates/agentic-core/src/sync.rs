//! Keeping a project's framework in step with upstream
//!
//! Both operations only make sense for projects that linked the framework as
//! a git submodule. A copied framework has no upstream to pull from or push
//! to.

use crate::enhancement;
use crate::error::{Result, ScaffoldError};
use crate::link::FRAMEWORK_DIR;
use crate::status::load_config;
use crate::vcs::VersionControl;
use std::path::{Path, PathBuf};
use tracing::info;

pub const UPDATE_COMMIT_MESSAGE: &str = "Update agentic SDLC framework to latest version";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The submodule moved and the new pointer was committed
    Updated,
    /// Upstream had nothing new; no commit was made
    AlreadyCurrent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// `branch` was created and checked out in `framework_dir`
    Branched { branch: String, framework_dir: PathBuf },
    /// The framework was copied, so changes have to be carried over by hand
    ManualMergeRequired,
}

/// Branch an enhancement is proposed on inside the framework repository
pub fn enhancement_branch(name: &str) -> String {
    format!("enhancement/{}", name)
}

/// Pull the newest framework commit into the project and commit the new
/// submodule pointer
pub fn update_framework<V: VersionControl>(vcs: &V, project_root: &Path) -> Result<UpdateOutcome> {
    let config = load_config(project_root)?;
    if !config.use_submodule {
        return Err(ScaffoldError::invalid(format!(
            "the framework was copied into this project, not linked as a submodule; \
             copy the newer framework files into {} by hand",
            FRAMEWORK_DIR
        )));
    }

    vcs.update_submodule(project_root, FRAMEWORK_DIR)?;
    vcs.stage(project_root, &[FRAMEWORK_DIR])?;
    if !vcs.has_staged_changes(project_root)? {
        info!("Framework already up to date");
        return Ok(UpdateOutcome::AlreadyCurrent);
    }
    vcs.commit(project_root, UPDATE_COMMIT_MESSAGE)?;
    info!("Framework updated");
    Ok(UpdateOutcome::Updated)
}

/// Prepare the framework submodule to receive the enhancement `name`
pub fn merge_enhancement<V: VersionControl>(
    vcs: &V,
    project_root: &Path,
    name: &str,
) -> Result<MergeOutcome> {
    let name = enhancement::validate_name(name)?;
    if !enhancement::enhancement_dir(project_root, name).is_dir() {
        return Err(ScaffoldError::invalid(format!(
            "enhancement '{}' not found in {}",
            name,
            enhancement::ENHANCEMENTS_DIR
        )));
    }

    let config = load_config(project_root)?;
    if !config.use_submodule {
        return Ok(MergeOutcome::ManualMergeRequired);
    }

    let framework_dir = project_root.join(FRAMEWORK_DIR);
    let branch = enhancement_branch(name);
    vcs.create_branch(&framework_dir, &branch)?;
    info!(branch = %branch, "Enhancement branch created in framework");
    Ok(MergeOutcome::Branched {
        branch,
        framework_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::project::{ProjectSpec, ProjectType};
    use crate::vcs::testing::FakeVcs;
    use tempfile::TempDir;

    fn project(use_submodule: bool) -> TempDir {
        let dir = TempDir::new().unwrap();
        let spec = ProjectSpec::new("demo", ProjectType::Api, None).unwrap();
        ProjectConfig::new(&spec, "1.0", use_submodule)
            .write(dir.path())
            .unwrap();
        dir
    }

    #[test]
    fn test_update_commits_new_pointer() {
        let dir = project(true);
        let vcs = FakeVcs {
            staged_changes: true,
            ..Default::default()
        };

        assert_eq!(update_framework(&vcs, dir.path()).unwrap(), UpdateOutcome::Updated);
        assert_eq!(
            *vcs.calls.borrow(),
            vec![
                "submodule update .agentic-framework".to_string(),
                "add .agentic-framework".to_string(),
                "diff --cached".to_string(),
                format!("commit {}", UPDATE_COMMIT_MESSAGE),
            ]
        );
    }

    #[test]
    fn test_update_without_upstream_changes_skips_commit() {
        let dir = project(true);
        let vcs = FakeVcs::default();

        assert_eq!(
            update_framework(&vcs, dir.path()).unwrap(),
            UpdateOutcome::AlreadyCurrent
        );
        assert!(!vcs.called("commit"));
    }

    #[test]
    fn test_update_rejects_copied_framework() {
        let dir = project(false);
        let vcs = FakeVcs::default();

        let err = update_framework(&vcs, dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidInput(_)));
        assert!(err.to_string().contains("copied"));
        assert!(vcs.calls.borrow().is_empty());
    }

    #[test]
    fn test_update_outside_project() {
        let dir = TempDir::new().unwrap();
        let err = update_framework(&FakeVcs::default(), dir.path()).unwrap_err();
        assert!(err.to_string().contains("no agentic project found"));
    }

    #[test]
    fn test_update_failure_propagates() {
        let dir = project(true);
        let vcs = FakeVcs {
            fail_update: true,
            ..Default::default()
        };
        let err = update_framework(&vcs, dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::VcsCommand { .. }));
        assert!(!vcs.called("add"));
    }

    #[test]
    fn test_merge_branches_inside_submodule() {
        let dir = project(true);
        enhancement::create_enhancement(dir.path(), "faster-qa", "d").unwrap();
        let vcs = FakeVcs::default();

        let outcome = merge_enhancement(&vcs, dir.path(), "faster-qa").unwrap();

        let framework_dir = dir.path().join(FRAMEWORK_DIR);
        assert_eq!(
            outcome,
            MergeOutcome::Branched {
                branch: "enhancement/faster-qa".to_string(),
                framework_dir: framework_dir.clone(),
            }
        );
        assert_eq!(
            *vcs.calls.borrow(),
            vec![format!("branch enhancement/faster-qa at {}", framework_dir.display())]
        );
    }

    #[test]
    fn test_merge_unknown_enhancement() {
        let dir = project(true);
        let vcs = FakeVcs::default();

        let err = merge_enhancement(&vcs, dir.path(), "nope").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidInput(_)));
        assert!(err.to_string().contains("'nope' not found"));
        assert!(vcs.calls.borrow().is_empty());
    }

    #[test]
    fn test_merge_copied_framework_needs_manual_work() {
        let dir = project(false);
        enhancement::create_enhancement(dir.path(), "faster-qa", "d").unwrap();
        let vcs = FakeVcs::default();

        assert_eq!(
            merge_enhancement(&vcs, dir.path(), "faster-qa").unwrap(),
            MergeOutcome::ManualMergeRequired
        );
        assert!(vcs.calls.borrow().is_empty());
    }
}
