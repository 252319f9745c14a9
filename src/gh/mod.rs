//! GitHub integration for the draft workflow.
//!
//! # Modules
//!
//! - [`types`] - Repository, user, and pull request identities
//! - [`repo`] - Repository spec parsing (`owner/name`, URLs, SSH remotes)
//! - [`graphql`] - [`HostingApi`] implementation on top of `gh api graphql`

mod graphql;
mod repo;
mod types;

use crate::error::Result;

pub use graphql::GhCli;
pub use repo::parse_repository_spec;
pub use types::{PullRequestResult, RepositoryIdentity, UserIdentity};

/// Hosting capabilities consumed by the draft workflow.
pub trait HostingApi {
    /// Look up a repository by owner and name.
    fn resolve_repository(&self, owner: &str, name: &str) -> Result<RepositoryIdentity>;

    /// Title of issue `number` in `repo`.
    fn issue_title(&self, repo: &RepositoryIdentity, number: u64) -> Result<String>;

    /// Open a pull request from `head` into `base`.
    fn create_pull_request(
        &self,
        repo_id: &str,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
        draft: bool,
    ) -> Result<PullRequestResult>;

    /// The authenticated user.
    fn viewer(&self) -> Result<UserIdentity>;

    /// Add `user_id` as an assignee of the pull request `pr_id`.
    fn add_assignee(&self, user_id: &str, pr_id: &str) -> Result<()>;
}

/// Resolve a repository spec in any accepted form through the hosting API.
pub fn resolve_repository_spec(api: &dyn HostingApi, spec: &str) -> Result<RepositoryIdentity> {
    let (owner, name) = parse_repository_spec(spec)?;
    api.resolve_repository(&owner, &name)
}
