//! settings-loader: resolve, parse and validate application settings
//!
//! Exits with status 1 and a diagnostic on stderr when the configuration
//! cannot be loaded.

use anyhow::Result;

fn main() -> Result<()> {
    settings_loader::cli::run()
}
