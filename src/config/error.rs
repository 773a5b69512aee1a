//! Config loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a configuration cannot be loaded.
///
/// None of these are transient: the caller is expected to report the error
/// and stop.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config path is not set. Use CONFIG_PATH env or --config flag")]
    PathNotSet,

    #[error("Config file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Required config field '{field}' is missing or empty")]
    MissingField { field: &'static str },
}
