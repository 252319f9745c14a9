//! Commit message augmentation.

const SIGNED_OFF_BY: &str = "Signed-off-by:";

/// Format the issue link line for `owner/name#issue`.
pub fn issue_link(owner: &str, name: &str, issue: u64) -> String {
    format!("issue: {}/{}#{}", owner, name, issue)
}

/// Insert an issue link into a commit message, before `Signed-off-by:` if present.
///
/// Returns the message unchanged when it already contains the link.
pub fn insert_issue_link(message: &str, owner: &str, name: &str, issue: u64) -> String {
    let link = issue_link(owner, name, issue);
    if message.contains(&link) {
        return message.to_string();
    }

    let (head, trailer) = match message.find(SIGNED_OFF_BY) {
        Some(index) => message.split_at(index),
        None => (message, ""),
    };

    let mut result = String::with_capacity(message.len() + link.len() + 2);
    result.push_str(head);
    if !head.is_empty() && !head.ends_with('\n') {
        result.push('\n');
    }
    result.push_str(&link);
    if !trailer.is_empty() {
        result.push('\n');
        result.push_str(trailer);
    }
    result
}
