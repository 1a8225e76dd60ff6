use crate::error::{Result, SemverError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "semver-bump.toml";
/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".semver-bump.toml";

/// Commit SHA the workflow was triggered for
pub const ENV_SHA: &str = "GITHUB_SHA";
/// Output file that the runner reads step outputs from
pub const ENV_OUTPUT: &str = "GITHUB_OUTPUT";
/// Path of the JSON event payload
pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";

/// Represents the complete configuration for semver-bump.
///
/// Built once at startup (file, then environment, then CLI flags) and passed
/// into the workflow; nothing reads the environment after that.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub github: GithubConfig,
}

fn default_repository_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_reference() -> String {
    "HEAD".to_string()
}

/// Where to look up the commit and tags
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_path")]
    pub path: PathBuf,

    /// Revision whose commit message decides the bump
    #[serde(default = "default_reference")]
    pub reference: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            path: default_repository_path(),
            reference: default_reference(),
        }
    }
}

fn default_new_release_key() -> String {
    "new-release".to_string()
}

fn default_version_key() -> String {
    "new-release-version".to_string()
}

/// Output sink settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// File to append `key=value` lines to; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_new_release_key")]
    pub new_release_key: String,

    #[serde(default = "default_version_key")]
    pub version_key: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: None,
            new_release_key: default_new_release_key(),
            version_key: default_version_key(),
        }
    }
}

/// GitHub Actions specific settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GithubConfig {
    /// Event payload to read the head commit message from
    #[serde(default)]
    pub event_path: Option<PathBuf>,
}

impl Config {
    /// Overlay values from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Overlay values from `lookup`; unset or empty variables are ignored
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(sha) = get(ENV_SHA) {
            self.repository.reference = sha;
        }
        if let Some(output) = get(ENV_OUTPUT) {
            self.output.path = Some(PathBuf::from(output));
        }
        if let Some(event_path) = get(ENV_EVENT_PATH) {
            self.github.event_path = Some(PathBuf::from(event_path));
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-bump.toml` in current directory
/// 3. `.semver-bump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(&local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        SemverError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| SemverError::config(format!("Invalid '{}': {}", path.display(), e)))
}
