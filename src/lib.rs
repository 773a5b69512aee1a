//! settings-loader: load application settings from a YAML file
//!
//! The config path comes from `CONFIG_PATH` or the `--config` flag. Parsed
//! values may be overridden per field by environment variables, and required
//! fields are validated before [`Settings`] is handed back.

pub mod cli;
pub mod config;
pub mod domain;

pub use config::{ConfigError, ConfigLoader};
pub use domain::Settings;
