//! Repository spec parsing.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GitDraftError, Result};

static REPOSITORY_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https?|ssh)://(?:[^@/]+@)?[^/]+/|[^@/\s]+@[^:/\s]+:)?([^/\s:]+)/([^/\s?#]+?)(?:\.git)?(?:[/?#].*)?$",
    )
    .expect("repository spec pattern is valid")
});

/// Extract `(owner, name)` from a repository spec.
///
/// Accepts `owner/name`, `https://host/owner/name`, `ssh://git@host/owner/name`
/// and `git@host:owner/name`, each optionally followed by `.git` or further
/// path, query, or fragment components.
pub fn parse_repository_spec(spec: &str) -> Result<(String, String)> {
    let caps = REPOSITORY_SPEC
        .captures(spec.trim())
        .ok_or_else(|| GitDraftError::InvalidRepository(spec.to_string()))?;

    Ok((caps[1].to_string(), caps[2].to_string()))
}
