//! Rendering of resolved settings

use anyhow::Result;
use clap::ValueEnum;

use crate::domain::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Render settings using the same keys as the config file.
pub fn render(settings: &Settings, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(settings)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(settings)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}
