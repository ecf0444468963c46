// error.rs — Error types for loading, editing, and saving qualgate.yml.

use thiserror::Error;

/// Errors that can occur while handling the configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The file exists but is not valid YAML.
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    /// The document could not be rendered back to YAML.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// The YAML is valid but its shape does not fit a configuration document.
    #[error("invalid configuration structure: {0}")]
    InvalidStructure(String),
}
