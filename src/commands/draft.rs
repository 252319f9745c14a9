//! Draft command handler.
//!
//! Backs both `git-draft draft` and `git-draft pr`; the only difference is
//! whether the pull request is opened as a draft.

use std::env;

use tracing::debug;

use crate::config::load_config;
use crate::error::Result;
use crate::gh::GhCli;
use crate::git::GitCli;
use crate::issue_ref::parse_issue_args;
use crate::output::print_aborted;
use crate::prompt::TerminalPrompter;
use crate::workflow::{DraftOptions, DraftWorkflow, WorkflowOutcome};

/// Open a pull request for the current branch.
///
/// # Arguments
///
/// * `args` - Positional `ISSUE` arguments (zero or one is valid)
/// * `title` - Explicit pull request title
/// * `draft` - Whether to open the pull request as a draft
///
/// # Returns
///
/// * `Ok(())` when the pull request was created or the user declined
/// * `Err(GitDraftError)` on invalid arguments or any failed step
pub fn draft_command(args: &[String], title: Option<String>, draft: bool) -> Result<()> {
    let reference = parse_issue_args(args)?;
    let options = DraftOptions::new(reference, title, draft);
    debug!(?options, "parsed options");

    let config = load_config()?;
    debug!(?config, "loaded configuration");

    let vcs = GitCli::new(env::current_dir()?, config.remote.clone());
    let api = GhCli::new(config.github_token.clone());
    let prompter = TerminalPrompter;

    match DraftWorkflow::new(&config, &vcs, &api, &prompter).run(&options)? {
        WorkflowOutcome::Created(_) => {}
        WorkflowOutcome::Declined => print_aborted(),
    }

    Ok(())
}
