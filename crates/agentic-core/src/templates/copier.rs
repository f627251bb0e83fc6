//! Template asset copying with merge semantics

use crate::error::{IoResultExt, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Entry names never copied, at any depth: VCS metadata and bytecode caches
pub const EXCLUDED_NAMES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
];

/// Whether a file or directory name is skipped when copying templates
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAMES.contains(&name)
}

/// Mirror `source` into `destination`, adding what is missing.
///
/// Files that already exist in `destination` are left untouched, and nothing
/// is ever removed. A missing `source` is a no-op. When `destination` lies
/// inside `source`, the branch leading to it is not copied. Returns the
/// relative paths of the files actually written.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    if !source.exists() {
        debug!(source = %source.display(), "template source missing, nothing to copy");
        return Ok(Vec::new());
    }

    fs::create_dir_all(destination).at_path(destination)?;
    let nested = nested_destination(source, destination)?;

    let mut copied = Vec::new();
    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !should_skip(entry) && !leads_to(entry, source, nested.as_deref()));

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .unwrap_or(entry.path())
            .to_path_buf();
        let target = destination.join(&relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).at_path(&target)?;
            continue;
        }

        if target.exists() {
            debug!(path = %relative.display(), "keeping existing file");
            continue;
        }

        if entry.file_type().is_symlink() && !entry.path().is_file() {
            // Dangling links and links to directories are not mirrored
            debug!(path = %relative.display(), "skipping symlink");
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).at_path(parent)?;
        }
        fs::copy(entry.path(), &target).at_path(entry.path())?;
        copied.push(relative);
    }

    Ok(copied)
}

fn should_skip(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(is_excluded)
}

/// `destination` relative to `source`, if it sits inside it
fn nested_destination(source: &Path, destination: &Path) -> Result<Option<PathBuf>> {
    let source = source.canonicalize().at_path(source)?;
    let destination = destination.canonicalize().at_path(destination)?;
    Ok(destination
        .strip_prefix(&source)
        .ok()
        .map(Path::to_path_buf))
}

/// Is `entry` the destination or one of its ancestors below `source`?
fn leads_to(entry: &DirEntry, source: &Path, nested: Option<&Path>) -> bool {
    let Some(nested) = nested else {
        return false;
    };
    entry
        .path()
        .strip_prefix(source)
        .is_ok_and(|relative| nested.as_os_str().is_empty() || nested.starts_with(relative))
}
