use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Explicitly named configuration file does not exist.
    #[error("Configuration file {path} does not exist")]
    NotFound { path: PathBuf },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// High-level failure types surfaced while preparing or running the dashboard.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to determine the current directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: io::Error,
    },
    #[error("`{name}` is not on the search path and automatic install is disabled")]
    DependencyMissing { name: PathBuf },
    #[error("Failed to run the dependency installer `{command}`: {source}")]
    InstallSpawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Dependency install exited abnormally (exit={exit_code:?})")]
    InstallFailed { exit_code: Option<i32> },
    #[error("Dashboard directory {path} does not exist")]
    AppDirMissing { path: PathBuf },
    #[error("Dashboard entry file {path} does not exist")]
    EntryFileMissing { path: PathBuf },
    #[error("Failed to start the dashboard server `{command}`: {source}")]
    ServerSpawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed waiting for the dashboard server: {source}")]
    ServerWait {
        #[source]
        source: io::Error,
    },
}
