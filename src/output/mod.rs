//! Terminal output formatting for git-draft.
//!
//! - [`messages`] - Error, warning, and info messages
//! - [`pr`] - Push and pull request output

pub mod messages;
pub mod pr;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

pub use messages::{print_aborted, print_error, print_issue_identity, print_warning};
pub use pr::{
    print_pr_created, print_push_already_up_to_date, print_push_success, print_pushing_branch,
};
