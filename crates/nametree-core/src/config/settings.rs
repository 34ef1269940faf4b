//! Configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in `config/default.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::{DEFAULT_TIMESTAMP_FORMAT, MAX_ELEMENTOS};
use crate::error::{TreeError, TreeResult};

/// Top-level configuration.
///
/// All fields have defaults so nametree works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`TreeError::ConfigNotFound`] if the file does not exist.
    /// - [`TreeError::Io`] if the file cannot be read.
    /// - [`TreeError::ConfigParse`] if the TOML is malformed or a value is out of range.
    pub fn load(path: &Path) -> TreeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TreeError::ConfigNotFound(path.to_path_buf()),
            _ => TreeError::Io(e),
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> TreeResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| TreeError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> TreeResult<()> {
        if self.tree.capacity == 0 {
            return Err(TreeError::ConfigParse(
                "tree.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Shape of the tree a navigator starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_root_name")]
    pub root_name: String,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            capacity: default_capacity(),
        }
    }
}

/// How listings and tree views are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub show_timestamps: bool,
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_timestamps: false,
            indent: default_indent(),
            date_format: default_date_format(),
        }
    }
}

fn default_root_name() -> String {
    "root".to_string()
}

fn default_capacity() -> usize {
    MAX_ELEMENTOS
}

fn default_indent() -> usize {
    2
}

fn default_date_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}
