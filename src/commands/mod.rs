//! CLI command handlers for git-draft.
//!
//! # Commands
//!
//! - [`draft`] - Push the branch and open a (draft) pull request
//! - [`config`] - Show the effective configuration

mod config;
mod draft;

pub use config::config_display_command;
pub use draft::draft_command;
