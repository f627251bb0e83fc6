//! Lookup of external command-line tools on PATH

use std::path::PathBuf;
use std::process::Command;

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "git")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Where to get it
    pub docs_url: &'static str,
}

/// Manager for checking CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Resolved location of the tool on PATH
    pub fn path(&self) -> Option<PathBuf> {
        which::which(self.config.name).ok()
    }

    pub fn is_installed(&self) -> bool {
        self.path().is_some()
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }
}

/// Pre-configured tool manager for git
pub fn git_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "git",
        display_name: "Git",
        docs_url: "https://git-scm.com/downloads",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool() {
        let tool = ToolManager::new(ToolConfig {
            name: "definitely-not-installed-tool",
            display_name: "Nope",
            docs_url: "https://example.com",
        });
        assert!(!tool.is_installed());
        assert!(tool.path().is_none());
        assert!(tool.get_version().is_none());
    }

    #[test]
    fn test_git_tool_matches_which() {
        let tool = git_tool();
        assert_eq!(tool.is_installed(), which::which("git").is_ok());
        if tool.is_installed() {
            assert!(tool.get_version().unwrap().starts_with("git version"));
        }
    }
}
