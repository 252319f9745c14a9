use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::output::{CYAN, GRAY, RESET};

/// Source of interactive answers.
pub trait Prompter {
    /// Show `prompt` and return the raw answer, or `default` on an empty line.
    fn ask(&self, prompt: &str, default: &str) -> io::Result<String>;
}

/// Prompter reading answers from the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &str, default: &str) -> io::Result<String> {
        print!("{CYAN}?{RESET} {} ", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer on standard input",
            ));
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }
}

/// Whether an answer counts as "yes".
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask a yes/no question that defaults to "no".
pub fn ask_yes_no(prompter: &dyn Prompter, question: &str) -> Result<bool> {
    let answer = prompter.ask(&format!("{} {GRAY}[y/N]{RESET}", question), "N")?;
    Ok(is_affirmative(&answer))
}
