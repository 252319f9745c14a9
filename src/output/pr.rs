//! Pull request operation output.

use super::colors::*;

/// Print the permalink of a newly created pull request.
pub fn print_pr_created(url: &str, draft: bool) {
    let kind = if draft {
        "draft pull request"
    } else {
        "pull request"
    };
    println!();
    println!("{GREEN}{BOLD}Created a {}:{RESET} {}", kind, url);
}

/// Print a status message when pushing branch to remote.
pub fn print_pushing_branch(branch: &str, remote: &str) {
    println!("{CYAN}Pushing branch '{}' to {}...{RESET}", branch, remote);
}

/// Print a success message when branch push completes.
pub fn print_push_success() {
    println!("{GREEN}Branch pushed successfully.{RESET}");
}

/// Print a message when branch is already up-to-date on remote.
pub fn print_push_already_up_to_date() {
    println!("{GRAY}Branch already up-to-date on remote.{RESET}");
}
