//! git-draft CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command handler.

use clap::{CommandFactory, Parser, Subcommand};
use git_draft::commands::{config_display_command, draft_command};
use git_draft::completion::{detect_shell, print_completion_script, ShellType};
use git_draft::output::print_error;
use tracing_subscriber::EnvFilter;

const ISSUE_FORMATS: &str = "ISSUE FORMATS:
    <issue number>
    <owner>/<repo>#<issue number>
    https://github.com/<owner>/<repo>#<issue number>
    git@github.com:<owner>/<repo>#<issue number>

    A bare issue number refers to the configured default_repository.";

#[derive(Parser)]
#[command(name = "git-draft")]
#[command(
    version,
    about = "Open pull requests for the current branch, linked to an issue",
    after_help = "EXAMPLES:
    git-draft draft                       # Draft PR from the first unmerged commit
    git-draft draft 42                    # ... linked to issue #42 of the default repository
    git-draft draft acme/widgets#7        # ... linked to an issue of another repository
    git-draft pr --title \"Fix parser\" 42  # Ready-for-review PR with an explicit title"
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a draft pull request for the current branch
    #[command(after_help = ISSUE_FORMATS)]
    Draft {
        /// Issue to link the pull request with
        #[arg(value_name = "ISSUE")]
        issue: Vec<String>,

        /// Title of the pull request (defaults to the commit summary)
        #[arg(long)]
        title: Option<String>,
    },

    /// Create a ready-for-review pull request for the current branch
    #[command(after_help = ISSUE_FORMATS)]
    Pr {
        /// Issue to link the pull request with
        #[arg(value_name = "ISSUE")]
        issue: Vec<String>,

        /// Title of the pull request (defaults to the commit summary)
        #[arg(long)]
        title: Option<String>,
    },

    /// Show the effective configuration
    Config,

    /// Print a shell completion script (bash, zsh, or fish)
    Completions {
        /// Shell to generate completions for; detected from $SHELL when omitted
        shell: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "git_draft=debug"
    } else {
        "git_draft=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Logs go to stderr so they don't interfere with prompts and links on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Draft { issue, title } => draft_command(&issue, title, true),
        Commands::Pr { issue, title } => draft_command(&issue, title, false),
        Commands::Config => config_display_command(),
        Commands::Completions { shell } => {
            let shell = match shell {
                Some(name) => ShellType::from_name(&name),
                None => detect_shell(),
            };
            shell.map(|shell| print_completion_script(shell, &mut Cli::command()))
        }
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
