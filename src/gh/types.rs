//! Core types for GitHub operations.

/// A repository resolved through the hosting API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub name: String,
    /// GraphQL node id
    pub id: String,
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub login: String,
    /// GraphQL node id
    pub id: String,
}

/// A pull request created by the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestResult {
    /// GraphQL node id
    pub id: String,
    pub permalink: String,
}
