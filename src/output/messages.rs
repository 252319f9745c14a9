//! Basic message output functions.

use super::colors::*;

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{BOLD}Error:{RESET} {}", msg);
}

fn format_warning(msg: &str) -> String {
    format!("{YELLOW}WARNING:{RESET} {}", msg)
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("{}", format_warning(msg));
}

fn format_issue_identity(owner: &str, name: &str, issue: u64, title: &str) -> String {
    format!("{BOLD}{}/{}#{}{RESET}: {}", owner, name, issue, title)
}

/// Print the issue a pull request is about to be linked with.
pub fn print_issue_identity(owner: &str, name: &str, issue: u64, title: &str) {
    println!("{}", format_issue_identity(owner, name, issue, title));
}

/// Print a note when the user declined to continue.
pub fn print_aborted() {
    println!("{GRAY}Aborted. Nothing was pushed.{RESET}");
}
