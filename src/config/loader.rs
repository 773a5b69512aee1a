//! Config file loading

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::overrides::apply_overrides;
use super::{ConfigError, CONFIG_PATH_ENV};
use crate::domain::Settings;

/// Environment lookup backed by the process environment.
pub type ProcessEnv = fn(&str) -> Option<String>;

fn process_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Loads [`Settings`] from a YAML file.
///
/// Environment access goes through `lookup` so loading has no hidden
/// dependency on process state.
pub struct ConfigLoader<F = ProcessEnv> {
    lookup: F,
}

impl ConfigLoader<ProcessEnv> {
    pub fn from_process_env() -> Self {
        Self::new(process_var)
    }
}

impl<F> ConfigLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Load settings, resolving the file from `CONFIG_PATH` first and the
    /// `--config` flag value second.
    pub fn load(&self, flag_path: Option<&Path>) -> Result<Settings, ConfigError> {
        let path = self.resolve_path(flag_path)?;
        self.load_from_file(&path)
    }

    /// Pick the config path. A non-empty `CONFIG_PATH` always wins.
    pub fn resolve_path(&self, flag_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(from_env) = (self.lookup)(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!("Using config path from {}: {}", CONFIG_PATH_ENV, from_env);
            return Ok(PathBuf::from(from_env));
        }

        match flag_path {
            Some(path) if !path.as_os_str().is_empty() => {
                tracing::debug!("Using config path from --config: {}", path.display());
                Ok(path.to_path_buf())
            }
            _ => Err(ConfigError::PathNotSet),
        }
    }

    /// Load settings from an already resolved path.
    ///
    /// Overrides are applied before validation, so a required field absent
    /// from the file may still be supplied by its environment variable.
    pub fn load_from_file(&self, path: &Path) -> Result<Settings, ConfigError> {
        match fs::metadata(path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound { path: path.to_path_buf() });
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        }

        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        let mut settings = parse_yaml_settings(&content, path)?;
        let applied = apply_overrides(&mut settings, &self.lookup);
        if !applied.is_empty() {
            tracing::debug!("Applied environment overrides: {}", applied.join(", "));
        }

        validate(&settings)?;
        Ok(settings)
    }
}

/// Parse YAML content into settings. An empty document yields defaults.
fn parse_yaml_settings(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    let parse_err = |source| ConfigError::Parse { path: path.to_path_buf(), source };

    let raw: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_err)?;
    if raw.is_null() {
        return Ok(Settings::default());
    }

    serde_yaml::from_value(raw).map_err(parse_err)
}

/// Check that every required field is non-empty.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let required = [("env", &settings.environment), ("storage_path", &settings.storage_path)];
    for (field, value) in required {
        if value.is_empty() {
            return Err(ConfigError::MissingField { field });
        }
    }
    Ok(())
}
