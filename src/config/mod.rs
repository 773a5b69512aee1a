//! Configuration loading
//!
//! Resolves the config file path, parses YAML into [`Settings`], applies
//! environment overrides, then validates required fields.
//!
//! [`Settings`]: crate::domain::Settings

pub mod error;
pub mod loader;
pub mod overrides;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use overrides::{describe_env, FieldOverride, FIELD_OVERRIDES};

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
