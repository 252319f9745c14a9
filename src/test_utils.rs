//! Test doubles shared across modules.
//!
//! Each fake records the calls it receives so tests can assert which
//! collaborator operations ran, and in particular which mutations did not.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

use crate::error::{GitDraftError, Result};
use crate::gh::{HostingApi, PullRequestResult, RepositoryIdentity, UserIdentity};
use crate::git::{CommitMessageDraft, PushResult, Vcs};
use crate::prompt::Prompter;

// ============================================================================
// Vcs
// ============================================================================

pub struct FakeVcs {
    branch: String,
    default_branch: String,
    commit: Option<CommitMessageDraft>,
    uncommitted: bool,
    origin: String,
    push_error: Option<String>,
    pushes: Mutex<Vec<String>>,
}

impl FakeVcs {
    /// A clean checkout of `branch` with one commit ahead of `main`.
    pub fn on_branch(branch: &str) -> Self {
        Self {
            branch: branch.to_string(),
            default_branch: "main".to_string(),
            commit: Some(CommitMessageDraft {
                hash: "abc1234".to_string(),
                summary: "Add feature".to_string(),
                body: "Explain the feature.\n\nSigned-off-by: Dev <dev@example.com>".to_string(),
            }),
            uncommitted: false,
            origin: "git@github.com:acme/widgets.git".to_string(),
            push_error: None,
            pushes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_uncommitted_files(mut self) -> Self {
        self.uncommitted = true;
        self
    }

    pub fn with_commit(mut self, summary: &str, body: &str) -> Self {
        self.commit = Some(CommitMessageDraft {
            hash: "def5678".to_string(),
            summary: summary.to_string(),
            body: body.to_string(),
        });
        self
    }

    pub fn without_commits(mut self) -> Self {
        self.commit = None;
        self
    }

    pub fn with_push_error(mut self, msg: &str) -> Self {
        self.push_error = Some(msg.to_string());
        self
    }

    /// Branches pushed so far.
    pub fn pushes(&self) -> Vec<String> {
        self.pushes.lock().unwrap().clone()
    }
}

impl Vcs for FakeVcs {
    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn default_branch(&self) -> Result<String> {
        Ok(self.default_branch.clone())
    }

    fn first_unmerged_commit(&self, base: &str) -> Result<CommitMessageDraft> {
        self.commit
            .clone()
            .ok_or_else(|| GitDraftError::NoUnmergedCommit(format!("origin/{}", base)))
    }

    fn has_uncommitted_files(&self) -> Result<bool> {
        Ok(self.uncommitted)
    }

    fn push(&self, branch: &str) -> Result<PushResult> {
        if let Some(msg) = &self.push_error {
            return Err(GitDraftError::PushFailed(msg.clone()));
        }
        self.pushes.lock().unwrap().push(branch.to_string());
        Ok(PushResult::Success)
    }

    fn origin_url(&self) -> Result<String> {
        Ok(self.origin.clone())
    }
}

// ============================================================================
// HostingApi
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostingCall {
    ResolveRepository(String),
    IssueTitle(u64),
    CreatePullRequest {
        repo_id: String,
        base: String,
        head: String,
        title: String,
        body: String,
        draft: bool,
    },
    Viewer,
    AddAssignee {
        user_id: String,
        pr_id: String,
    },
}

impl HostingCall {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            HostingCall::CreatePullRequest { .. } | HostingCall::AddAssignee { .. }
        )
    }
}

pub struct FakeHosting {
    repos: HashMap<String, RepositoryIdentity>,
    issues: HashMap<(String, u64), String>,
    fail_create: bool,
    calls: Mutex<Vec<HostingCall>>,
}

impl FakeHosting {
    /// Knows `acme/widgets` and `cybozu/csa`, with no issues.
    pub fn new() -> Self {
        let mut fake = Self {
            repos: HashMap::new(),
            issues: HashMap::new(),
            fail_create: false,
            calls: Mutex::new(Vec::new()),
        };
        fake.add_repo("acme", "widgets");
        fake.add_repo("cybozu", "csa");
        fake
    }

    fn add_repo(&mut self, owner: &str, name: &str) {
        self.repos.insert(
            format!("{}/{}", owner, name),
            RepositoryIdentity {
                owner: owner.to_string(),
                name: name.to_string(),
                id: format!("R_{}", name),
            },
        );
    }

    pub fn with_issue(mut self, owner: &str, name: &str, number: u64, title: &str) -> Self {
        self.add_repo(owner, name);
        self.issues
            .insert((format!("{}/{}", owner, name), number), title.to_string());
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn calls(&self) -> Vec<HostingCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<HostingCall> {
        self.calls().into_iter().filter(|c| c.is_mutation()).collect()
    }

    fn record(&self, call: HostingCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for FakeHosting {
    fn default() -> Self {
        Self::new()
    }
}

impl HostingApi for FakeHosting {
    fn resolve_repository(&self, owner: &str, name: &str) -> Result<RepositoryIdentity> {
        let key = format!("{}/{}", owner, name);
        self.record(HostingCall::ResolveRepository(key.clone()));
        self.repos
            .get(&key)
            .cloned()
            .ok_or_else(|| GitDraftError::GhError(format!("repository {} not found", key)))
    }

    fn issue_title(&self, repo: &RepositoryIdentity, number: u64) -> Result<String> {
        self.record(HostingCall::IssueTitle(number));
        let key = (format!("{}/{}", repo.owner, repo.name), number);
        self.issues
            .get(&key)
            .cloned()
            .ok_or_else(|| GitDraftError::GhError(format!("issue #{} not found", number)))
    }

    fn create_pull_request(
        &self,
        repo_id: &str,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
        draft: bool,
    ) -> Result<PullRequestResult> {
        self.record(HostingCall::CreatePullRequest {
            repo_id: repo_id.to_string(),
            base: base.to_string(),
            head: head.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            draft,
        });
        if self.fail_create {
            return Err(GitDraftError::GhError("createPullRequest failed".to_string()));
        }
        Ok(PullRequestResult {
            id: "PR_1".to_string(),
            permalink: "https://github.com/acme/widgets/pull/1".to_string(),
        })
    }

    fn viewer(&self) -> Result<UserIdentity> {
        self.record(HostingCall::Viewer);
        Ok(UserIdentity {
            login: "dev".to_string(),
            id: "U_dev".to_string(),
        })
    }

    fn add_assignee(&self, user_id: &str, pr_id: &str) -> Result<()> {
        self.record(HostingCall::AddAssignee {
            user_id: user_id.to_string(),
            pr_id: pr_id.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// Prompter
// ============================================================================

/// Answers prompts from a fixed script; fails once the script runs out.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, prompt: &str, default: &str) -> io::Result<String> {
        self.asked.lock().unwrap().push(prompt.to_string());
        let answer = self.answers.lock().unwrap().pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "prompt script exhausted")
        })?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}
