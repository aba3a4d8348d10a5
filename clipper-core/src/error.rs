//! Error types for clipper-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while building the process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was present in neither the environment nor the
    /// config file.
    #[error("missing required configuration value '{0}'")]
    Missing(&'static str),

    /// Underlying I/O failure while reading the config file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from
    /// serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Rejection of an inbound clip payload. Checked before any remote call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// `text` or `url` absent or empty.
    #[error("Missing text or url")]
    MissingTextOrUrl,
}
