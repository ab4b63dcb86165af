use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "bump-version.toml";

/// Represents the complete configuration for bump-version.
///
/// Contains the manifest location and the commit settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub commit: CommitConfig,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("package.json")
}

/// Which manifest to edit and where its version lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,

    /// `json` or `toml`; inferred from the file extension when absent
    #[serde(default)]
    pub format: Option<String>,

    /// Key holding the version. For JSON a top-level key, for TOML a dotted
    /// path such as `package.version`.
    #[serde(default)]
    pub key: Option<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
            format: None,
            key: None,
        }
    }
}

fn default_commit_message() -> String {
    "Update version to {version}".to_string()
}

/// Settings for the optional git commit.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitConfig {
    /// Commit after every successful bump, as if `+c` was given
    #[serde(default)]
    pub auto: bool,

    /// Message template; `{version}` and `{previous}` are substituted
    #[serde(default = "default_commit_message")]
    pub message: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        CommitConfig {
            auto: false,
            message: default_commit_message(),
        }
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| BumpError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bump-version.toml` in current directory
/// 3. `bump-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or if the
///   explicit path does not exist
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("Cannot read config '{}': {}", path.display(), e))
    })?;

    parse_config(&text).map_err(|e| match e {
        BumpError::Config(msg) => {
            BumpError::config(format!("Invalid config '{}': {}", path.display(), msg))
        }
        other => other,
    })
}

fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
