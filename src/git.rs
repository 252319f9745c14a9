//! Git operations used by the draft workflow.
//!
//! [`Vcs`] is the capability set the workflow needs; [`GitCli`] implements it
//! by running the `git` binary in a working directory.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{GitDraftError, Result};

/// The commit a pull request's title and body are taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessageDraft {
    pub hash: String,
    pub summary: String,
    pub body: String,
}

/// Result type for push operations
#[derive(Debug, Clone, PartialEq)]
pub enum PushResult {
    /// Push succeeded
    Success,
    /// Branch already up-to-date on remote
    AlreadyUpToDate,
}

/// Version-control capabilities consumed by the draft workflow.
pub trait Vcs {
    /// Name of the checked-out branch.
    fn current_branch(&self) -> Result<String>;

    /// Name of the remote's default branch.
    fn default_branch(&self) -> Result<String>;

    /// Oldest commit on `HEAD` that is not on the remote's `base` branch.
    fn first_unmerged_commit(&self, base: &str) -> Result<CommitMessageDraft>;

    /// Whether the working tree has uncommitted changes.
    fn has_uncommitted_files(&self) -> Result<bool>;

    /// Push `branch` to the same-named remote branch and set upstream tracking.
    fn push(&self, branch: &str) -> Result<PushResult>;

    /// URL of the remote.
    fn origin_url(&self) -> Result<String>;
}

/// [`Vcs`] backed by the `git` command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: PathBuf,
    remote: String,
}

impl GitCli {
    pub fn new(dir: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            remote: remote.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!(dir = %self.dir.display(), ?args, "running git");
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.dir);
        cmd
    }

    /// Run git and return its trimmed stdout, or the stderr as an error.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.command(args).output()?;

        if !output.status.success() {
            return Err(GitDraftError::GitError(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn ref_exists(&self, reference: &str) -> Result<bool> {
        let output = self
            .command(&["show-ref", "--verify", "--quiet", reference])
            .output()?;
        Ok(output.status.success())
    }
}

impl Vcs for GitCli {
    fn current_branch(&self) -> Result<String> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn default_branch(&self) -> Result<String> {
        let head_ref = format!("refs/remotes/{}/HEAD", self.remote);
        if let Ok(name) = self.run(&["symbolic-ref", "--short", &head_ref]) {
            let prefix = format!("{}/", self.remote);
            return Ok(name
                .strip_prefix(&prefix)
                .map(str::to_string)
                .unwrap_or(name));
        }

        for candidate in ["main", "master"] {
            if self.ref_exists(&format!("refs/remotes/{}/{}", self.remote, candidate))? {
                debug!(candidate, "no remote HEAD, falling back");
                return Ok(candidate.to_string());
            }
        }

        Err(GitDraftError::GitError(format!(
            "cannot determine the default branch of '{}'; run 'git remote set-head {} --auto'",
            self.remote, self.remote
        )))
    }

    fn first_unmerged_commit(&self, base: &str) -> Result<CommitMessageDraft> {
        let range = format!("{}/{}..HEAD", self.remote, base);
        let revs = self.run(&["rev-list", "--reverse", &range])?;
        let hash = revs
            .lines()
            .next()
            .ok_or_else(|| GitDraftError::NoUnmergedCommit(format!("{}/{}", self.remote, base)))?
            .to_string();

        let summary = self.run(&["show", "-s", "--format=%s", &hash])?;
        let body = self.run(&["show", "-s", "--format=%b", &hash])?;

        Ok(CommitMessageDraft {
            hash,
            summary,
            body,
        })
    }

    fn has_uncommitted_files(&self) -> Result<bool> {
        let status = self.run(&["status", "--porcelain"])?;
        Ok(!status.is_empty())
    }

    fn push(&self, branch: &str) -> Result<PushResult> {
        let refspec = format!("{}:{}", branch, branch);
        let output = self
            .command(&["push", "--set-upstream", &self.remote, &refspec])
            .output()?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            // git reports this on stderr
            if stderr.contains("Everything up-to-date") {
                return Ok(PushResult::AlreadyUpToDate);
            }
            return Ok(PushResult::Success);
        }

        let error_msg = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        Err(GitDraftError::PushFailed(error_msg))
    }

    fn origin_url(&self) -> Result<String> {
        self.run(&["remote", "get-url", &self.remote])
    }
}
