use crate::error::{AutoverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for autover.
///
/// Covers where the declared version lives, how the release commit and tag
/// are formatted, and which remote/branch receives the push.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_version_key")]
    pub version_key: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_version_file() -> String {
    "Cargo.toml".to_string()
}

fn default_version_key() -> String {
    "package.version".to_string()
}

fn default_commit_message() -> String {
    "chore: release {version}".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            branch: default_branch(),
            tag_pattern: default_tag_pattern(),
            version_file: default_version_file(),
            version_key: default_version_key(),
            commit_message: default_commit_message(),
        }
    }
}

impl Config {
    /// Format the tag name for a version
    pub fn tag_for(&self, version: &str) -> String {
        self.tag_pattern.replace("{version}", version)
    }

    /// Format the release commit message for a version
    pub fn commit_message_for(&self, version: &str) -> String {
        self.commit_message.replace("{version}", version)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `autover.toml` in the current directory
/// 3. `.autover.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./autover.toml").exists() {
        fs::read_to_string("./autover.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".autover.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| AutoverError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}
