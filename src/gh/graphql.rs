//! [`HostingApi`] on top of `gh api graphql`.

use std::io;
use std::process::Command;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{GitDraftError, Result};

use super::types::{PullRequestResult, RepositoryIdentity, UserIdentity};
use super::HostingApi;

const REPOSITORY_QUERY: &str = "query($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) { id name owner { login } }
}";

const ISSUE_TITLE_QUERY: &str = "query($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) { issue(number: $number) { title } }
}";

const CREATE_PULL_REQUEST_MUTATION: &str = "mutation($repositoryId: ID!, $baseRefName: String!, $headRefName: String!, $title: String!, $body: String!, $draft: Boolean!) {
  createPullRequest(input: {repositoryId: $repositoryId, baseRefName: $baseRefName, headRefName: $headRefName, title: $title, body: $body, draft: $draft}) {
    pullRequest { id permalink }
  }
}";

const VIEWER_QUERY: &str = "query { viewer { id login } }";

const ADD_ASSIGNEE_MUTATION: &str = "mutation($assignableId: ID!, $userId: ID!) {
  addAssigneesToAssignable(input: {assignableId: $assignableId, assigneeIds: [$userId]}) { clientMutationId }
}";

/// A GraphQL variable passed on the `gh api` command line.
#[derive(Debug, Clone, PartialEq)]
enum Variable<'a> {
    /// `-f name=value`, always sent as a string
    Raw(&'a str, &'a str),
    /// `-F name=value`, converted by gh to a number or boolean
    Typed(&'a str, String),
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Body gh prints on stdout when the request itself fails (HTTP 4xx/5xx).
#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    errors: Vec<GraphQlError>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepositoryData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    id: String,
    name: String,
    owner: OwnerNode,
}

#[derive(Debug, Deserialize)]
struct OwnerNode {
    login: String,
}

#[derive(Debug, Deserialize)]
struct IssueData {
    repository: Option<IssueRepository>,
}

#[derive(Debug, Deserialize)]
struct IssueRepository {
    issue: Option<IssueNode>,
}

#[derive(Debug, Deserialize)]
struct IssueNode {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePullRequestData {
    create_pull_request: CreatePullRequestPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePullRequestPayload {
    pull_request: PullRequestNode,
}

#[derive(Debug, Deserialize)]
struct PullRequestNode {
    id: String,
    permalink: String,
}

#[derive(Debug, Deserialize)]
struct ViewerData {
    viewer: ViewerNode,
}

#[derive(Debug, Deserialize)]
struct ViewerNode {
    id: String,
    login: String,
}

/// [`HostingApi`] that shells out to the GitHub CLI.
#[derive(Debug, Clone, Default)]
pub struct GhCli {
    token: Option<String>,
}

impl GhCli {
    /// Create a client. `token`, when given, is exported to gh as `GH_TOKEN`.
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    fn graphql<T: DeserializeOwned>(&self, query: &str, variables: &[Variable<'_>]) -> Result<T> {
        let args = build_args(query, variables);
        debug!(
            query = query.lines().next().unwrap_or(query),
            "running gh api graphql"
        );

        let mut cmd = Command::new("gh");
        cmd.args(&args);
        if let Some(token) = &self.token {
            cmd.env("GH_TOKEN", token);
        }
        let output = cmd.output().map_err(spawn_error)?;

        interpret_output(
            output.status.success(),
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
        )
    }
}

fn spawn_error(err: io::Error) -> GitDraftError {
    if err.kind() == io::ErrorKind::NotFound {
        GitDraftError::GhError(
            "GitHub CLI (gh) not installed. Install from https://cli.github.com".to_string(),
        )
    } else {
        GitDraftError::Io(err)
    }
}

fn build_args(query: &str, variables: &[Variable<'_>]) -> Vec<String> {
    let mut args = vec![
        "api".to_string(),
        "graphql".to_string(),
        "-f".to_string(),
        format!("query={}", query),
    ];
    for variable in variables {
        match variable {
            Variable::Raw(name, value) => {
                args.push("-f".to_string());
                args.push(format!("{}={}", name, value));
            }
            Variable::Typed(name, value) => {
                args.push("-F".to_string());
                args.push(format!("{}={}", name, value));
            }
        }
    }
    args
}

/// Decode a GraphQL response body, turning reported errors into [`GitDraftError::GhError`].
fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: GraphQlResponse<T> = serde_json::from_str(body.trim())?;

    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(GitDraftError::GhError(messages.join("; ")));
    }

    response
        .data
        .ok_or_else(|| GitDraftError::GhError("response contained no data".to_string()))
}

/// Turn a finished gh invocation into a decoded response or the error gh reported.
fn interpret_output<T: DeserializeOwned>(success: bool, stdout: &str, stderr: &str) -> Result<T> {
    if success {
        return decode_response(stdout);
    }

    let body = serde_json::from_str::<FailureBody>(stdout.trim()).ok();
    if let Some(body) = &body {
        if !body.errors.is_empty() {
            let messages: Vec<_> = body.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(GitDraftError::GhError(messages.join("; ")));
        }
    }

    let message = if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else if let Some(message) = body.and_then(|b| b.message) {
        message
    } else if !stdout.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        "gh exited with an error and no output".to_string()
    };
    Err(GitDraftError::GhError(message))
}

impl HostingApi for GhCli {
    fn resolve_repository(&self, owner: &str, name: &str) -> Result<RepositoryIdentity> {
        let data: RepositoryData = self.graphql(
            REPOSITORY_QUERY,
            &[Variable::Raw("owner", owner), Variable::Raw("name", name)],
        )?;

        let repo = data
            .repository
            .ok_or_else(|| GitDraftError::GhError(format!("repository {}/{} not found", owner, name)))?;

        Ok(RepositoryIdentity {
            owner: repo.owner.login,
            name: repo.name,
            id: repo.id,
        })
    }

    fn issue_title(&self, repo: &RepositoryIdentity, number: u64) -> Result<String> {
        let data: IssueData = self.graphql(
            ISSUE_TITLE_QUERY,
            &[
                Variable::Raw("owner", &repo.owner),
                Variable::Raw("name", &repo.name),
                Variable::Typed("number", number.to_string()),
            ],
        )?;

        data.repository
            .and_then(|r| r.issue)
            .map(|issue| issue.title)
            .ok_or_else(|| {
                GitDraftError::GhError(format!(
                    "issue {}/{}#{} not found",
                    repo.owner, repo.name, number
                ))
            })
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
        info!(base, head, draft, "creating pull request");
        let data: CreatePullRequestData = self.graphql(
            CREATE_PULL_REQUEST_MUTATION,
            &[
                Variable::Raw("repositoryId", repo_id),
                Variable::Raw("baseRefName", base),
                Variable::Raw("headRefName", head),
                Variable::Raw("title", title),
                Variable::Raw("body", body),
                Variable::Typed("draft", draft.to_string()),
            ],
        )?;

        let pr = data.create_pull_request.pull_request;
        Ok(PullRequestResult {
            id: pr.id,
            permalink: pr.permalink,
        })
    }

    fn viewer(&self) -> Result<UserIdentity> {
        let data: ViewerData = self.graphql(VIEWER_QUERY, &[])?;
        Ok(UserIdentity {
            login: data.viewer.login,
            id: data.viewer.id,
        })
    }

    fn add_assignee(&self, user_id: &str, pr_id: &str) -> Result<()> {
        info!(pr_id, "assigning pull request");
        let _: serde_json::Value = self.graphql(
            ADD_ASSIGNEE_MUTATION,
            &[
                Variable::Raw("assignableId", pr_id),
                Variable::Raw("userId", user_id),
            ],
        )?;
        Ok(())
    }
}
