//! Command-line interface for settings-loader
//!
//! Loads settings once and prints the resolved values. Any load failure is
//! returned to `main`, which reports it on stderr and exits with status 1.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{describe_env, ConfigLoader};

mod show;

use show::OutputFormat;

/// Load application settings from a YAML file
#[derive(Parser)]
#[command(name = "settings-loader")]
#[command(author, version, about, long_about = None)]
#[command(after_help = env_help())]
pub struct Cli {
    /// Path to the configuration file (used when CONFIG_PATH is unset)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format for the resolved settings
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn env_help() -> String {
    format!("Environment variables:\n{}", describe_env())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let settings = ConfigLoader::from_process_env().load(cli.config.as_deref())?;
    tracing::info!("Loaded settings for environment '{}'", settings.environment);

    print!("{}", show::render(&settings, cli.format)?);
    Ok(())
}
