//! Loader failures.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ConfigGuardRailError;

/// Why [`ConfigLoader::load`](super::ConfigLoader::load) failed.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// An explicitly requested file does not exist.
    #[error("config file {path} does not exist")]
    Missing {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// TOML error with line and column.
        #[source]
        source: toml::de::Error,
    },
    /// An override variable could not be parsed.
    #[error("environment variable {key} has invalid value '{value}'")]
    InvalidEnv {
        /// Variable name.
        key: &'static str,
        /// Raw value as read from the environment.
        value: String,
    },
    /// The merged config failed validation.
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}
