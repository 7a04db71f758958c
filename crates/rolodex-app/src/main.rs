//! Rolodex application binary - composition root.
//!
//! Ties the Rolodex crates into a single executable:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Build the shared application state
//! 4. Start the axum server and serve the dashboard at /ui

mod cli;

use clap::Parser;

use rolodex_api::{routes, AppState};
use rolodex_core::config::RolodexConfig;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = RolodexConfig::load_or_default(&config_file);
    config.server.port = args.resolve_port(config.server.port);
    let log_level = args.resolve_log_level(&config.general.log_level);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Rolodex v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    if !config.records.is_complete() {
        tracing::warn!(
            missing = ?config.records.missing_fields(),
            "Record source connection is incomplete; set it in the dashboard or the config file"
        );
    }

    let port = config.server.port;
    let state = AppState::new(config, config_file);

    tracing::info!("Dashboard at http://127.0.0.1:{}/ui", port);

    if let Err(e) = routes::start_server(port, state).await {
        tracing::error!(error = %e, "Server failed — is another instance running?");
        tracing::error!("Try: ROLODEX_PORT={} rolodex", port + 1);
        return Err(e.into());
    }

    Ok(())
}
