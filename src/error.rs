use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitDraftError {
    #[error("too many arguments")]
    TooManyArguments,

    #[error("too many '#' in issue number")]
    TooManyHashes,

    #[error("invalid issue number: {0}")]
    InvalidIssueNumber(#[from] ParseIntError),

    #[error("direct push to {0} is prohibited")]
    DirectPushProhibited(String),

    #[error("no commits on this branch that are not in {0}")]
    NoUnmergedCommit(String),

    #[error("Git error: {0}")]
    GitError(String),

    #[error("Failed to push branch: {0}")]
    PushFailed(String),

    #[error("GitHub error: {0}")]
    GhError(String),

    #[error("Invalid repository: {0}")]
    InvalidRepository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GitDraftError {
    /// Whether the error comes from a malformed command-line argument.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            GitDraftError::TooManyArguments
                | GitDraftError::TooManyHashes
                | GitDraftError::InvalidIssueNumber(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GitDraftError>;
