//! The draft pull request workflow.
//!
//! Steps run strictly in order and the first failure stops everything after
//! it. Nothing is rolled back: a branch that was already pushed stays pushed
//! when pull request creation fails.

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{GitDraftError, Result};
use crate::gate::{ConfirmationGate, IssueIdentityGate, UncommittedFilesGate, Verdict};
use crate::gh::{resolve_repository_spec, HostingApi, PullRequestResult, RepositoryIdentity};
use crate::git::{CommitMessageDraft, PushResult, Vcs};
use crate::issue_ref::IssueReference;
use crate::message::insert_issue_link;
use crate::output::{
    print_pr_created, print_push_already_up_to_date, print_push_success, print_pushing_branch,
};
use crate::prompt::Prompter;

/// Per-invocation options built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOptions {
    /// Overrides the commit summary as the pull request title.
    pub title: Option<String>,
    /// Repository the issue lives in; the configured default when `None`.
    pub repository_spec: Option<String>,
    /// `0` when no issue is linked.
    pub issue_number: u64,
    /// Open as a draft rather than ready for review.
    pub draft: bool,
}

impl DraftOptions {
    pub fn new(reference: IssueReference, title: Option<String>, draft: bool) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            repository_spec: reference.repository_spec,
            issue_number: reference.issue_number,
            draft,
        }
    }

    pub fn has_issue(&self) -> bool {
        self.issue_number != 0
    }
}

/// How a workflow run ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Created(PullRequestResult),
    /// The user answered "no" at a confirmation gate; nothing was changed.
    Declined,
}

/// Pull request title: the explicit title, else the commit summary.
pub fn compose_title(options: &DraftOptions, commit: &CommitMessageDraft) -> String {
    options
        .title
        .clone()
        .unwrap_or_else(|| commit.summary.clone())
}

/// Pull request body: the commit body, linked to the issue when one is given.
pub fn compose_body(
    options: &DraftOptions,
    commit: &CommitMessageDraft,
    issue_repo: &RepositoryIdentity,
) -> String {
    if !options.has_issue() {
        return commit.body.clone();
    }
    insert_issue_link(
        &commit.body,
        &issue_repo.owner,
        &issue_repo.name,
        options.issue_number,
    )
}

pub struct DraftWorkflow<'a> {
    config: &'a Config,
    vcs: &'a dyn Vcs,
    api: &'a dyn HostingApi,
    prompter: &'a dyn Prompter,
}

impl<'a> DraftWorkflow<'a> {
    pub fn new(
        config: &'a Config,
        vcs: &'a dyn Vcs,
        api: &'a dyn HostingApi,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            config,
            vcs,
            api,
            prompter,
        }
    }

    pub fn run(&self, options: &DraftOptions) -> Result<WorkflowOutcome> {
        let branch = self.vcs.current_branch()?;
        let default_branch = self.vcs.default_branch()?;
        debug!(%branch, %default_branch, "checked branches");
        if branch == default_branch {
            return Err(GitDraftError::DirectPushProhibited(default_branch));
        }

        let commit = self.vcs.first_unmerged_commit(&default_branch)?;
        debug!(hash = %commit.hash, summary = %commit.summary, "using first unmerged commit");

        let gates = ConfirmationGate::new(self.prompter);
        if gates.run(&[&UncommittedFilesGate { vcs: self.vcs }])? == Verdict::Declined {
            return Ok(WorkflowOutcome::Declined);
        }

        let current_repo = resolve_repository_spec(self.api, &self.vcs.origin_url()?)?;
        let issue_repo_spec = options
            .repository_spec
            .as_deref()
            .unwrap_or(&self.config.default_repository);
        let issue_repo = resolve_repository_spec(self.api, issue_repo_spec)?;
        debug!(
            current = %format!("{}/{}", current_repo.owner, current_repo.name),
            issue = %format!("{}/{}", issue_repo.owner, issue_repo.name),
            "resolved repositories"
        );

        let issue_gate = IssueIdentityGate {
            api: self.api,
            repo: &issue_repo,
            issue_number: options.issue_number,
        };
        if gates.run(&[&issue_gate])? == Verdict::Declined {
            return Ok(WorkflowOutcome::Declined);
        }

        print_pushing_branch(&branch, &self.config.remote);
        match self.vcs.push(&branch)? {
            PushResult::Success => print_push_success(),
            PushResult::AlreadyUpToDate => print_push_already_up_to_date(),
        }

        let title = compose_title(options, &commit);
        let body = compose_body(options, &commit, &issue_repo);

        let pr = self.api.create_pull_request(
            &current_repo.id,
            &default_branch,
            &branch,
            &title,
            &body,
            options.draft,
        )?;
        info!(permalink = %pr.permalink, "pull request created");
        print_pr_created(&pr.permalink, options.draft);

        let viewer = self.api.viewer()?;
        self.api.add_assignee(&viewer.id, &pr.id)?;
        debug!(login = %viewer.login, "assigned pull request");

        Ok(WorkflowOutcome::Created(pr))
    }
}
