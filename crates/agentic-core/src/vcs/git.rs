use super::VersionControl;
use crate::error::{Result, ScaffoldError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Runs `git` as a blocking subprocess
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    /// `-c key=value` pairs passed before every subcommand
    config: Vec<(String, String)>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            config: Vec::new(),
        }
    }

    /// Add a `-c key=value` override to every invocation
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.push((key.into(), value.into()));
        self
    }

    fn command(&self, dir: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        for (key, value) in &self.config {
            cmd.arg("-c").arg(format!("{key}={value}"));
        }
        cmd.args(args).current_dir(dir);
        cmd
    }

    /// Run a git command and return its output whatever the exit status
    fn run(&self, dir: &Path, args: &[&str]) -> Result<Output> {
        debug!(args = ?args, dir = %dir.display(), "Running git command");

        self.command(dir, args).output().map_err(|e| {
            // A missing working directory also surfaces as NotFound
            if e.kind() == ErrorKind::NotFound && dir.is_dir() {
                ScaffoldError::VcsUnavailable(self.program.display().to_string())
            } else {
                ScaffoldError::io(dir, e)
            }
        })
    }

    fn failure(args: &[&str], output: &Output) -> ScaffoldError {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(args = ?args, stderr = %stderr, "Git command failed");
        ScaffoldError::VcsCommand {
            command: format!("git {}", args.join(" ")),
            stderr,
        }
    }

    /// Run a git command, failing on a non-zero exit status
    pub fn run_checked(&self, dir: &Path, args: &[&str]) -> Result<Output> {
        let output = self.run(dir, args)?;
        if !output.status.success() {
            return Err(Self::failure(args, &output));
        }
        Ok(output)
    }
}

impl VersionControl for GitCli {
    fn init(&self, repo: &Path) -> Result<()> {
        self.run_checked(repo, &["init", "--quiet"])?;
        Ok(())
    }

    fn add_submodule(&self, repo: &Path, url: &str, dest: &str) -> Result<()> {
        // Local paths use the file transport, which git blocks for submodules by default
        self.run_checked(
            repo,
            &[
                "-c",
                "protocol.file.allow=always",
                "submodule",
                "add",
                "--quiet",
                url,
                dest,
            ],
        )?;
        Ok(())
    }

    fn stage_all(&self, repo: &Path) -> Result<()> {
        self.run_checked(repo, &["add", "-A"])?;
        Ok(())
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        self.run_checked(repo, &["commit", "--quiet", "-m", message])?;
        Ok(())
    }

    fn update_submodule(&self, repo: &Path, path: &str) -> Result<()> {
        self.run_checked(
            repo,
            &[
                "-c",
                "protocol.file.allow=always",
                "submodule",
                "update",
                "--remote",
                "--quiet",
                "--",
                path,
            ],
        )?;
        Ok(())
    }

    fn stage(&self, repo: &Path, paths: &[&str]) -> Result<()> {
        let mut args = vec!["add", "--"];
        args.extend_from_slice(paths);
        self.run_checked(repo, &args)?;
        Ok(())
    }

    fn has_staged_changes(&self, repo: &Path) -> Result<bool> {
        let args = ["diff", "--cached", "--quiet"];
        let output = self.run(repo, &args)?;
        // --quiet exits 1 when there are differences
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(Self::failure(&args, &output)),
        }
    }

    fn create_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        self.run_checked(repo, &["checkout", "--quiet", "-b", branch])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git_available() -> bool {
        which::which("git").is_ok()
    }

    #[test]
    fn test_missing_executable_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let git = GitCli::new("definitely-not-a-real-git-binary");
        let err = git.init(dir.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::VcsUnavailable(_)));
    }

    #[test]
    fn test_config_pairs_precede_subcommand() {
        let git = GitCli::default().with_config("user.name", "Test");
        let cmd = git.command(Path::new("."), &["status"]);
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["-c", "user.name=Test", "status"]);
    }

    #[test]
    fn test_init_and_commit_with_real_git() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let git = GitCli::default()
            .with_config("user.name", "Agentic Test")
            .with_config("user.email", "test@example.com")
            .with_config("commit.gpgsign", "false");

        git.init(dir.path()).unwrap();
        std::fs::write(dir.path().join("README.md"), "# test\n").unwrap();
        git.stage_all(dir.path()).unwrap();
        git.commit(dir.path(), "initial").unwrap();

        assert!(dir.path().join(".git").is_dir());
        let log = git.run_checked(dir.path(), &["log", "--oneline"]).unwrap();
        assert!(String::from_utf8_lossy(&log.stdout).contains("initial"));
    }

    #[test]
    fn test_staged_changes_and_branch_with_real_git() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let git = GitCli::default()
            .with_config("user.name", "Agentic Test")
            .with_config("user.email", "test@example.com")
            .with_config("commit.gpgsign", "false");

        git.init(dir.path()).unwrap();
        std::fs::write(dir.path().join("a.md"), "a\n").unwrap();
        std::fs::write(dir.path().join("b.md"), "b\n").unwrap();
        git.stage(dir.path(), &["a.md"]).unwrap();
        assert!(git.has_staged_changes(dir.path()).unwrap());
        git.commit(dir.path(), "a only").unwrap();
        assert!(!git.has_staged_changes(dir.path()).unwrap());

        git.create_branch(dir.path(), "enhancement/faster-qa").unwrap();
        let head = git
            .run_checked(dir.path(), &["rev-parse", "--abbrev-ref", "HEAD"])
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&head.stdout).trim(), "enhancement/faster-qa");

        let status = git.run_checked(dir.path(), &["status", "--porcelain"]).unwrap();
        assert_eq!(String::from_utf8_lossy(&status.stdout).trim(), "?? b.md");
    }

    #[test]
    fn test_failed_command_reports_stderr() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let err = GitCli::default()
            .run_checked(dir.path(), &["rev-parse", "HEAD"])
            .unwrap_err();
        match err {
            ScaffoldError::VcsCommand { command, .. } => {
                assert_eq!(command, "git rev-parse HEAD");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
