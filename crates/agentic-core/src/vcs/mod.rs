//! Version control operations used while bootstrapping
//!
//! Provides:
//! - `VersionControl`: the operations the bootstrapper needs
//! - `GitCli`: implementation backed by the `git` executable

mod git;

pub use git::GitCli;

use crate::error::Result;
use std::path::Path;

/// Repository operations, each run to completion before returning
pub trait VersionControl {
    /// Create an empty repository rooted at `repo`
    fn init(&self, repo: &Path) -> Result<()>;

    /// Register `url` as a submodule checked out at `dest` (relative to `repo`)
    fn add_submodule(&self, repo: &Path, url: &str, dest: &str) -> Result<()>;

    /// Stage every file in the working tree
    fn stage_all(&self, repo: &Path) -> Result<()>;

    /// Record staged changes as one commit
    fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Move the submodule at `path` to the newest commit of its upstream
    fn update_submodule(&self, repo: &Path, path: &str) -> Result<()>;

    /// Stage only `paths`
    fn stage(&self, repo: &Path, paths: &[&str]) -> Result<()>;

    /// Whether the index differs from `HEAD`
    fn has_staged_changes(&self, repo: &Path) -> Result<bool>;

    /// Create `branch` at `HEAD` and switch to it
    fn create_branch(&self, repo: &Path, branch: &str) -> Result<()>;
}
