//! Contribution templates for improvements meant to flow back into the
//! framework

use crate::error::{IoResultExt, Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ENHANCEMENTS_DIR: &str = "agentic-enhancements";

/// Create `agentic-enhancements/<name>/README.md` under `project_root`.
///
/// The directory is reused if present; the README is always rewritten.
/// Returns the enhancement directory.
pub fn create_enhancement(project_root: &Path, name: &str, description: &str) -> Result<PathBuf> {
    let name = validate_name(name)?;
    let dir = enhancement_dir(project_root, name);
    fs::create_dir_all(&dir).at_path(&dir)?;

    let project_context = project_root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();

    let readme = dir.join("README.md");
    fs::write(&readme, render(name, description, &date, &project_context)).at_path(&readme)?;
    info!(enhancement = %name, "Enhancement template created");
    Ok(dir)
}

/// Trimmed `name`, if it is a single path component
pub(crate) fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() || name == "." || name == ".." || name.contains(|c: char| c == '/' || c == '\\') {
        return Err(ScaffoldError::invalid(format!(
            "'{}' is not a usable enhancement name",
            name
        )));
    }
    Ok(name)
}

pub fn enhancement_dir(project_root: &Path, name: &str) -> PathBuf {
    project_root.join(ENHANCEMENTS_DIR).join(name)
}

fn render(name: &str, description: &str, date: &str, project: &str) -> String {
    format!(
        r#"# Enhancement: {name}

## Description
{description}

## Date Created
{date}

## Project Context
{project}

## Problem Solved
[Describe the issue this enhancement addresses]

## Solution
[Describe your solution approach]

## Files Modified
[List the framework files that need to be updated]

## Testing
[How was this enhancement tested?]

## Impact Assessment
- [ ] Affects all projects using the framework
- [ ] Backward compatible
- [ ] Requires documentation updates
- [ ] Needs new dependencies

## Merge Checklist
- [ ] Enhancement tested in project context
- [ ] Framework files updated
- [ ] Documentation updated
- [ ] Example usage provided
- [ ] Backward compatibility maintained
"#
    )
}

/// Names of the enhancement directories in a project, sorted
pub fn list_enhancements(project_root: &Path) -> Result<Vec<String>> {
    let dir = project_root.join(ENHANCEMENTS_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(&dir).at_path(&dir)? {
        let entry = entry.at_path(&dir)?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_template() {
        let dir = TempDir::new().unwrap();
        let path = create_enhancement(dir.path(), "better-qa", "Sharper QA prompts").unwrap();

        assert_eq!(path, dir.path().join("agentic-enhancements/better-qa"));
        let readme = fs::read_to_string(path.join("README.md")).unwrap();
        assert!(readme.starts_with("# Enhancement: better-qa\n"));
        assert!(readme.contains("## Description\nSharper QA prompts\n"));
    }

    #[test]
    fn test_rerun_overwrites_readme() {
        let dir = TempDir::new().unwrap();
        let path = create_enhancement(dir.path(), "x", "first").unwrap();
        fs::write(path.join("notes.txt"), "keep").unwrap();
        create_enhancement(dir.path(), "x", "second").unwrap();

        let readme = fs::read_to_string(path.join("README.md")).unwrap();
        assert!(readme.contains("second"));
        assert!(!readme.contains("first"));
        assert!(path.join("notes.txt").exists());
    }

    #[test]
    fn test_rejects_path_like_names() {
        let dir = TempDir::new().unwrap();
        for name in ["", "..", "a/b", "a\\b"] {
            let err = create_enhancement(dir.path(), name, "d").unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidInput(_)), "{name}");
        }
    }

    #[test]
    fn test_list_enhancements() {
        let dir = TempDir::new().unwrap();
        assert!(list_enhancements(dir.path()).unwrap().is_empty());

        create_enhancement(dir.path(), "zeta", "z").unwrap();
        create_enhancement(dir.path(), "alpha", "a").unwrap();
        fs::write(dir.path().join(ENHANCEMENTS_DIR).join("stray.md"), "").unwrap();

        assert_eq!(list_enhancements(dir.path()).unwrap(), vec!["alpha", "zeta"]);
    }
}
