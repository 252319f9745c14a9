pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod gate;
pub mod gh;
pub mod git;
pub mod issue_ref;
pub mod message;
pub mod output;
pub mod prompt;
pub mod workflow;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{GitDraftError, Result};
pub use issue_ref::{parse_issue_args, IssueReference};
pub use message::insert_issue_link;
pub use workflow::{DraftOptions, DraftWorkflow, WorkflowOutcome};
