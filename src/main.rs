//! HTTP server for the consultant forecast engine.
//!
//! Reads `FORECAST_CONFIG_DIR` (default `./config/se`) and
//! `FORECAST_BIND_ADDR` (default `0.0.0.0:3000`).

use std::env;
use std::process::ExitCode;

use consultant_forecast::api::{AppState, create_router};
use consultant_forecast::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_DIR: &str = "./config/se";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("consultant_forecast=info"));

    fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config_dir = env::var("FORECAST_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("FORECAST_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        jurisdiction = %config.jurisdiction().code,
        years = ?config.years(),
        "Configuration loaded"
    );

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(bind_addr = %bind_addr, "Listening");

    let router = create_router(AppState::new(config));
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
