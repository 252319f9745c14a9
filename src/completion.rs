//! Shell completion scripts for git-draft.

use crate::error::{GitDraftError, Result};
use clap::Command;
use clap_complete::{generate, Shell};

/// Shell names accepted by `git-draft completions`.
pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Convert to the `clap_complete::Shell` type.
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    /// Parse a shell from a name or a path such as `/usr/bin/zsh`.
    pub fn from_name(shell: &str) -> Result<ShellType> {
        let shell_name = std::path::Path::new(shell)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(shell);

        match shell_name {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(GitDraftError::ShellCompletion(format!(
                "Unsupported shell: '{}'. Supported shells are: {}.",
                shell_name,
                SUPPORTED_SHELLS.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the user's shell from the `$SHELL` environment variable.
pub fn detect_shell() -> Result<ShellType> {
    let shell_path = std::env::var("SHELL").map_err(|_| {
        GitDraftError::ShellCompletion(
            "$SHELL is not set. Pass the shell name explicitly.".to_string(),
        )
    })?;
    ShellType::from_name(&shell_path)
}

/// Generate the completion script for `cmd`.
pub fn generate_completion_script(shell: ShellType, cmd: &mut Command) -> String {
    let bin_name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell.to_clap_shell(), cmd, bin_name, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Print the completion script for `cmd` to stdout.
pub fn print_completion_script(shell: ShellType, cmd: &mut Command) {
    print!("{}", generate_completion_script(shell, cmd));
}
