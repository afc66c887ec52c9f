//! Main entry point for the mocatalog command line tool.

use clap::Parser;
use mocatalog_cli::{load_config, CatalogApp, Cli};
use mocatalog_config::LoggingConfig;
use std::io;
use tracing::{debug, error};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.logging);
    debug!("Loaded configuration: {:?}", config);

    let app = CatalogApp::new(config, cli.json);
    let mut out = io::stdout().lock();
    if let Err(e) = app.execute(&cli.command, &mut out) {
        error!("Command failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Logs go to stderr so reports on stdout stay clean.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| fmt::layer().json().with_writer(io::stderr)))
        .with((!logging.json).then(|| fmt::layer().with_writer(io::stderr)))
        .init();
}
