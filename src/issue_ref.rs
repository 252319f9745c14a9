//! Issue reference parsing for the positional `ISSUE` argument.
//!
//! Accepted forms:
//!
//! - `<issue number>`
//! - `<owner>/<repo>#<issue number>`
//! - `https://github.com/<owner>/<repo>#<issue number>`
//! - `git@github.com:<owner>/<repo>#<issue number>`
//!
//! The repository part is kept as opaque text here; it is resolved later by
//! [`crate::gh::parse_repository_spec`].

use crate::error::{GitDraftError, Result};

/// An issue, optionally qualified by the repository it lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueReference {
    /// Repository text left of `#`, `None` when the number was given bare.
    pub repository_spec: Option<String>,
    /// Issue number, `0` when no issue was given.
    pub issue_number: u64,
}

impl IssueReference {
    /// Whether an issue was actually supplied.
    pub fn is_present(&self) -> bool {
        self.issue_number != 0
    }
}

/// Parse zero or one positional arguments into an [`IssueReference`].
pub fn parse_issue_args<S: AsRef<str>>(args: &[S]) -> Result<IssueReference> {
    let arg = match args {
        [] => return Ok(IssueReference::default()),
        [arg] => arg.as_ref(),
        _ => return Err(GitDraftError::TooManyArguments),
    };

    let (repository_spec, number) = match arg.split('#').collect::<Vec<_>>()[..] {
        [number] => (None, number),
        [repo, number] => ((!repo.is_empty()).then(|| repo.to_string()), number),
        _ => return Err(GitDraftError::TooManyHashes),
    };

    let issue_number = number.parse::<u64>()?;
    Ok(IssueReference {
        repository_spec,
        issue_number,
    })
}
