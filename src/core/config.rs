//! Configuration file management.
//!
//! Reads and writes `config.toml` in the config directory
//! (`$TALLY_CONFIG_DIR`, or `~/.tally`). A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub output: Output,
}

/// Node API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    /// Node base URLs; the first one is used.
    pub nodes: Vec<String>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            nodes: vec![constants::DEFAULT_NODE.to_string()],
        }
    }
}

/// Output preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Print JSON instead of key-value lines
    #[serde(default)]
    pub json: bool,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    /// Directory holding the config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if neither `TALLY_CONFIG_DIR` nor a
    /// home directory is available.
    pub fn dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(constants::CONFIG_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(constants::CONFIG_DIR))
    }

    /// Path to the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join(constants::CONFIG_FILE))
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load the config from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(nodes = config.api.nodes.len(), "config loaded");
        Ok(config)
    }

    /// Save the config, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteFile)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;
        Ok(())
    }

    /// Update one setting by its dotted key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` or `ConfigError::InvalidValue`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.nodes" => {
                let nodes: Vec<String> = value
                    .split(',')
                    .map(|n| n.trim().trim_end_matches('/').to_string())
                    .filter(|n| !n.is_empty())
                    .collect();
                for node in &nodes {
                    validate_node(node)?;
                }
                if nodes.is_empty() {
                    return Err(invalid(key, "at least one node is required"));
                }
                self.api.nodes = nodes;
            }
            "output.json" => self.output.json = parse_bool(key, value)?,
            "output.pretty" => self.output.pretty = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        Ok(())
    }

    /// Base URL of the node to talk to.
    pub fn node_url(&self) -> &str {
        self.api
            .nodes
            .first()
            .map(String::as_str)
            .unwrap_or(constants::DEFAULT_NODE)
    }

    fn validate(&self) -> Result<()> {
        for node in &self.api.nodes {
            validate_node(node)?;
        }
        Ok(())
    }
}

fn validate_node(node: &str) -> Result<()> {
    if node.starts_with("http://") || node.starts_with("https://") {
        Ok(())
    } else {
        Err(invalid(
            "api.nodes",
            &format!("{} must start with http:// or https://", node),
        ))
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, "expected true or false")),
    }
}

fn invalid(key: &str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
