//! Error types for `nametree-core`.
//!
//! The navigator's public contract reports failures as booleans. The
//! `try_*` variants underneath return [`TreeResult<T>`], an alias for
//! `Result<T, TreeError>`, so callers can tell the failures apart.

use std::path::PathBuf;

/// Unified error type for all core operations.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// No child with the given name exists in the current container.
    #[error("not found: {0}")]
    NotFound(String),

    /// The name resolved to a leaf where a container was expected.
    #[error("not a container: {0}")]
    NotAContainer(String),

    /// The target container already holds `capacity` children.
    #[error("container {name} is full ({capacity} items)")]
    ContainerFull { name: String, capacity: usize },

    /// The configuration file does not exist.
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Failed to parse or validate a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A snapshot could not be rendered as JSON.
    #[error("snapshot export failed: {0}")]
    Export(#[from] serde_json::Error),

    /// An I/O error while reading configuration.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `nametree-core`.
pub type TreeResult<T> = Result<T, TreeError>;
