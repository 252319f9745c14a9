//! Config command handler.
//!
//! Displays the effective git-draft configuration.

use crate::config::{config_path, load_config, TOKEN_ENV_VAR};
use crate::error::Result;
use crate::output::{BOLD, GRAY, RESET, YELLOW};

/// Display the effective configuration as TOML, with the token redacted.
pub fn config_display_command() -> Result<()> {
    let path = config_path()?;
    println!("{BOLD}# git-draft config{RESET}");
    println!("{GRAY}# {}{RESET}", path.display());
    if !path.exists() {
        println!("{YELLOW}# (file does not exist, using defaults){RESET}");
    }
    println!();

    let config = load_config()?;
    println!("default_repository = {:?}", config.default_repository);
    println!("remote = {:?}", config.remote);
    match config.github_token {
        Some(_) => println!("github_token = \"<redacted>\""),
        None => println!(
            "{GRAY}# github_token not set; gh uses its own login ({} overrides){RESET}",
            TOKEN_ENV_VAR
        ),
    }

    Ok(())
}
