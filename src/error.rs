//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with the key = value config file
//! - SourceError: Issues locating or fetching the manifest
//! - AppError: Everything a single run can fail with
//!
//! Dependency extraction itself has no error type: bad manifest text
//! degrades to an empty or partial table.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Config file related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Manifest source related errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Config loaded but none of the recognized keys are set
    #[error("config file {path} contains no recognized keys")]
    EmptyConfig { path: PathBuf },

    /// Failed to write the report
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read config file
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write config file
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to locating and reading the manifest
#[derive(Error, Debug)]
pub enum SourceError {
    /// Manifest file or URL does not exist
    #[error("manifest not found: {location}")]
    NotFound { location: String },

    /// Any other read or transport failure
    #[error("failed to read manifest from {location}: {message}")]
    Io { location: String, message: String },

    /// Neither repository_path nor repository_url is configured
    #[error("no manifest source configured: set repository_path or repository_url")]
    MissingSource,
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new Read error, mapping a missing file to NotFound
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::not_found(path)
        } else {
            ConfigError::Read { path, source }
        }
    }
}

impl SourceError {
    /// Creates a new NotFound error
    pub fn not_found(location: impl Into<String>) -> Self {
        SourceError::NotFound {
            location: location.into(),
        }
    }

    /// Creates a new Io error
    pub fn io(location: impl Into<String>, message: impl Into<String>) -> Self {
        SourceError::Io {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Creates an error from a local read failure
    pub fn from_read(path: &std::path::Path, source: std::io::Error) -> Self {
        let location = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound { location }
        } else {
            SourceError::Io {
                location,
                message: source.to_string(),
            }
        }
    }

    /// Returns true if this error means the manifest does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}
