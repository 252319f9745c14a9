use crate::error::{GitDraftError, Result};
use crate::gh::parse_repository_spec;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "git-draft";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding `github_token`.
pub const TOKEN_ENV_VAR: &str = "GIT_DRAFT_GITHUB_TOKEN";

/// Repository issues are looked up in when `ISSUE` carries no repository.
pub const DEFAULT_REPOSITORY: &str = "cybozu/csa";

/// Remote pushed to and used to identify the current repository.
pub const DEFAULT_REMOTE: &str = "origin";

/// Settings for the draft workflow.
///
/// Missing fields fall back to their defaults, so an empty or absent file
/// behaves like:
///
/// ```toml
/// default_repository = "cybozu/csa"
/// remote = "origin"
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository for bare issue numbers, in any `owner/name` form.
    #[serde(default = "default_repository")]
    pub default_repository: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Token handed to `gh` as `GH_TOKEN`. When unset, gh uses its own login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

fn default_repository() -> String {
    DEFAULT_REPOSITORY.to_string()
}

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_repository: default_repository(),
            remote: default_remote(),
            github_token: None,
        }
    }
}

// Hand-written so the token never reaches logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("default_repository", &self.default_repository)
            .field("remote", &self.remote)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

// ============================================================================
// Config Validation
// ============================================================================

/// Error type for configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `default_repository` is not a recognizable repository spec.
    InvalidDefaultRepository(String),
    /// `remote` is empty.
    EmptyRemote,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDefaultRepository(spec) => write!(
                f,
                "default_repository = {:?} is not of the form owner/name",
                spec
            ),
            ConfigError::EmptyRemote => write!(f, "remote must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validate a configuration for consistency.
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    if parse_repository_spec(&config.default_repository).is_err() {
        return Err(ConfigError::InvalidDefaultRepository(
            config.default_repository.clone(),
        ));
    }
    if config.remote.trim().is_empty() {
        return Err(ConfigError::EmptyRemote);
    }
    Ok(())
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the git-draft config directory path (~/.config/git-draft/).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| GitDraftError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load configuration from `path`, using defaults when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        GitDraftError::Config(format!(
            "Failed to parse config file at {:?}: {}",
            path, e
        ))
    })?;

    validate_config(&config).map_err(|e| {
        GitDraftError::Config(format!("Invalid config file at {:?}: {}", path, e))
    })?;

    Ok(config)
}

/// Apply a token taken from the environment over the file setting.
pub fn apply_token_override(mut config: Config, token: Option<String>) -> Config {
    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
        config.github_token = Some(token);
    }
    config
}

/// Load the effective configuration: `~/.config/git-draft/config.toml`
/// plus the `GIT_DRAFT_GITHUB_TOKEN` override.
pub fn load_config() -> Result<Config> {
    let config = load_config_from(&config_path()?)?;
    Ok(apply_token_override(config, env::var(TOKEN_ENV_VAR).ok()))
}
