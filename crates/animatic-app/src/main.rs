//! Animatic Builder - assemble video shots into an animatic
//!
//! Entry point: parses arguments, sets up logging and settings, and runs one
//! subcommand.

use animatic_app::{commands, AppConfig, Cli};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Logs go to stderr so command output stays clean.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Animatic Builder v{}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;
    debug!(project = %cli.project.display(), "Using project");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(cli.command, &cli.project, &config, &mut out)
}
