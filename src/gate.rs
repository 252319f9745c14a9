//! Confirmation gates run before the workflow mutates anything.
//!
//! A gate decides whether it applies, shows a notice, and asks a yes/no
//! question that defaults to "no". Gates run in order and the first declined
//! gate stops the pipeline.

use tracing::debug;

use crate::error::Result;
use crate::gh::{HostingApi, RepositoryIdentity};
use crate::git::Vcs;
use crate::output::{print_issue_identity, print_warning};
use crate::prompt::{ask_yes_no, Prompter};

/// What a gate shows before asking its question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warning(String),
    Issue {
        owner: String,
        name: String,
        number: u64,
        title: String,
    },
}

impl Notice {
    fn print(&self) {
        match self {
            Notice::Warning(msg) => print_warning(msg),
            Notice::Issue {
                owner,
                name,
                number,
                title,
            } => print_issue_identity(owner, name, *number, title),
        }
    }
}

/// Result of running a set of gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Declined,
}

/// A single confirmation step.
pub trait Gate {
    /// The notice to show, or `None` when the gate does not apply.
    fn notice(&self) -> Result<Option<Notice>>;

    /// The question asked after the notice.
    fn question(&self) -> &str;
}

/// Runs gates against a [`Prompter`].
pub struct ConfirmationGate<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> ConfirmationGate<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Run `gates` in order, stopping at the first declined one.
    pub fn run(&self, gates: &[&dyn Gate]) -> Result<Verdict> {
        for gate in gates {
            let Some(notice) = gate.notice()? else {
                debug!(question = gate.question(), "gate does not apply");
                continue;
            };

            notice.print();
            if !ask_yes_no(self.prompter, gate.question())? {
                debug!(question = gate.question(), "gate declined");
                return Ok(Verdict::Declined);
            }
        }
        Ok(Verdict::Approved)
    }
}

/// Asks before continuing with a dirty working tree.
pub struct UncommittedFilesGate<'a> {
    pub vcs: &'a dyn Vcs,
}

impl Gate for UncommittedFilesGate<'_> {
    fn notice(&self) -> Result<Option<Notice>> {
        if !self.vcs.has_uncommitted_files()? {
            return Ok(None);
        }
        Ok(Some(Notice::Warning(
            "you have uncommitted files.".to_string(),
        )))
    }

    fn question(&self) -> &str {
        "Continue?"
    }
}

/// Asks the user to confirm the issue the pull request will be linked with.
pub struct IssueIdentityGate<'a> {
    pub api: &'a dyn HostingApi,
    pub repo: &'a RepositoryIdentity,
    pub issue_number: u64,
}

impl Gate for IssueIdentityGate<'_> {
    fn notice(&self) -> Result<Option<Notice>> {
        if self.issue_number == 0 {
            return Ok(None);
        }
        let title = self.api.issue_title(self.repo, self.issue_number)?;
        Ok(Some(Notice::Issue {
            owner: self.repo.owner.clone(),
            name: self.repo.name.clone(),
            number: self.issue_number,
            title,
        }))
    }

    fn question(&self) -> &str {
        "Is this ok?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeHosting, FakeVcs, ScriptedPrompter};

    fn repo() -> RepositoryIdentity {
        RepositoryIdentity {
            owner: "cybozu".to_string(),
            name: "csa".to_string(),
            id: "R_csa".to_string(),
        }
    }

    #[test]
    fn test_clean_tree_skips_uncommitted_gate_without_asking() {
        let vcs = FakeVcs::on_branch("feature");
        let prompter = ScriptedPrompter::new(&[]);
        let verdict = ConfirmationGate::new(&prompter)
            .run(&[&UncommittedFilesGate { vcs: &vcs }])
            .unwrap();
        assert_eq!(verdict, Verdict::Approved);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_dirty_tree_asks_and_respects_no() {
        let vcs = FakeVcs::on_branch("feature").with_uncommitted_files();
        let prompter = ScriptedPrompter::new(&[""]);
        let verdict = ConfirmationGate::new(&prompter)
            .run(&[&UncommittedFilesGate { vcs: &vcs }])
            .unwrap();
        assert_eq!(verdict, Verdict::Declined);
        assert!(prompter.asked()[0].starts_with("Continue?"));
    }

    #[test]
    fn test_dirty_tree_continues_on_yes() {
        let vcs = FakeVcs::on_branch("feature").with_uncommitted_files();
        let prompter = ScriptedPrompter::new(&["Y"]);
        let verdict = ConfirmationGate::new(&prompter)
            .run(&[&UncommittedFilesGate { vcs: &vcs }])
            .unwrap();
        assert_eq!(verdict, Verdict::Approved);
    }

    #[test]
    fn test_issue_gate_shows_title_and_asks() {
        let api = FakeHosting::new().with_issue("cybozu", "csa", 5, "Fix the thing");
        let repo = repo();
        let gate = IssueIdentityGate {
            api: &api,
            repo: &repo,
            issue_number: 5,
        };
        assert_eq!(
            gate.notice().unwrap(),
            Some(Notice::Issue {
                owner: "cybozu".to_string(),
                name: "csa".to_string(),
                number: 5,
                title: "Fix the thing".to_string(),
            })
        );

        let prompter = ScriptedPrompter::new(&["yes"]);
        let verdict = ConfirmationGate::new(&prompter).run(&[&gate]).unwrap();
        assert_eq!(verdict, Verdict::Approved);
        assert!(prompter.asked()[0].starts_with("Is this ok?"));
    }

    #[test]
    fn test_issue_gate_skipped_without_issue() {
        let api = FakeHosting::new();
        let repo = repo();
        let gate = IssueIdentityGate {
            api: &api,
            repo: &repo,
            issue_number: 0,
        };
        assert_eq!(gate.notice().unwrap(), None);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_issue_lookup_failure_propagates() {
        let api = FakeHosting::new();
        let repo = repo();
        let gate = IssueIdentityGate {
            api: &api,
            repo: &repo,
            issue_number: 404,
        };
        let prompter = ScriptedPrompter::new(&["y"]);
        assert!(ConfirmationGate::new(&prompter).run(&[&gate]).is_err());
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_first_decline_stops_pipeline() {
        let vcs = FakeVcs::on_branch("feature").with_uncommitted_files();
        let api = FakeHosting::new().with_issue("cybozu", "csa", 5, "Fix the thing");
        let repo = repo();
        let issue_gate = IssueIdentityGate {
            api: &api,
            repo: &repo,
            issue_number: 5,
        };
        let prompter = ScriptedPrompter::new(&["n", "y"]);
        let verdict = ConfirmationGate::new(&prompter)
            .run(&[&UncommittedFilesGate { vcs: &vcs }, &issue_gate])
            .unwrap();
        assert_eq!(verdict, Verdict::Declined);
        assert_eq!(prompter.asked().len(), 1);
        assert!(api.calls().is_empty());
    }
}
