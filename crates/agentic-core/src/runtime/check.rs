//! Environment diagnostics for the `doctor` command

use super::tool::{git_tool, ToolManager};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Missing,
}

/// Outcome of one diagnostic check
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub name: String,
    pub status: CheckStatus,
    /// Version, path, or other context
    pub detail: Option<String>,
    /// What to do about a failed check
    pub remedy: Option<String>,
}

impl Diagnostic {
    fn ok(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
            detail: Some(detail.into()),
            remedy: None,
        }
    }

    fn missing(name: impl Into<String>, remedy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Missing,
            detail: None,
            remedy: Some(remedy.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.name, detail),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Is the CLI entry point reachable on PATH?
pub fn check_entry_point(entry_point: &'static str) -> Diagnostic {
    let tool = ToolManager::new(super::tool::ToolConfig {
        name: entry_point,
        display_name: entry_point,
        docs_url: "",
    });
    let name = format!("`{}` on PATH", entry_point);
    match tool.path() {
        Some(path) => Diagnostic::ok(name, path.display().to_string()),
        None => Diagnostic::missing(
            name,
            "Install with `cargo install agentic-tools` and make sure the cargo bin directory is on PATH",
        ),
    }
}

/// Is `bin_dir` one of the entries of `path_var`?
pub fn dir_on_path(bin_dir: &Path, path_var: Option<&OsStr>) -> bool {
    let Some(path_var) = path_var else {
        return false;
    };
    std::env::split_paths(path_var).any(|entry| {
        entry == bin_dir
            || matches!(
                (entry.canonicalize(), bin_dir.canonicalize()),
                (Ok(a), Ok(b)) if a == b
            )
    })
}

/// Is cargo's bin directory on PATH, so `cargo install`ed tools run?
pub fn check_cargo_bin() -> Diagnostic {
    let name = "cargo bin directory on PATH";
    let bin_dir = match home::cargo_home() {
        Ok(home) => home.join("bin"),
        Err(_) => {
            return Diagnostic::missing(
                name,
                "Could not determine CARGO_HOME; install Rust from https://rustup.rs",
            );
        }
    };
    let path_var = std::env::var_os("PATH");
    cargo_bin_diagnostic(name, bin_dir, path_var.as_deref())
}

fn cargo_bin_diagnostic(name: &str, bin_dir: PathBuf, path_var: Option<&OsStr>) -> Diagnostic {
    if dir_on_path(&bin_dir, path_var) {
        Diagnostic::ok(name, bin_dir.display().to_string())
    } else {
        Diagnostic::missing(
            name,
            format!("Add it to your shell profile: export PATH=\"{}:$PATH\"", bin_dir.display()),
        )
    }
}

/// Is git installed, and which version?
pub fn check_git() -> Diagnostic {
    check_tool(&git_tool())
}

fn check_tool(tool: &ToolManager) -> Diagnostic {
    let config = tool.config();
    if !tool.is_installed() {
        return Diagnostic::missing(
            config.display_name,
            format!("Install {} from {}", config.display_name, config.docs_url),
        );
    }
    let version = tool.get_version().unwrap_or_else(|| "unknown version".to_string());
    Diagnostic::ok(config.display_name, version)
}

/// Is a framework source configured, and does it exist?
pub fn check_framework(source: Option<&Path>, env_var: &str) -> Diagnostic {
    let name = "Framework source";
    match source {
        None => Diagnostic::missing(
            name,
            format!("Pass --framework <DIR> or set {}", env_var),
        ),
        Some(path) if path.is_dir() => Diagnostic::ok(name, path.display().to_string()),
        Some(path) => Diagnostic::missing(
            name,
            format!(
                "{} is not a directory; point --framework or {} at the framework checkout",
                path.display(),
                env_var
            ),
        ),
    }
}

/// Every doctor check, in display order
pub fn run_diagnostics(
    entry_points: &[&'static str],
    framework: Option<&Path>,
    framework_env: &str,
) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<_> = entry_points.iter().copied().map(check_entry_point).collect();
    diagnostics.push(check_cargo_bin());
    diagnostics.push(check_git());
    diagnostics.push(check_framework(framework, framework_env));
    diagnostics
}
