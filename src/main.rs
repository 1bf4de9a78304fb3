//! Payroll engine HTTP server.
//!
//! Loads a payroll data directory and serves the payroll API.
//!
//! Environment:
//! - `PAYROLL_DATA_DIR` (default `./config/sample`)
//! - `PAYROLL_BIND_ADDR` (default `0.0.0.0:3000`)
//! - `RUST_LOG` (default `info`)

use std::env;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::engine::PayrollEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATA_DIR: &str = "./config/sample";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_dir = env::var("PAYROLL_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let store = ConfigLoader::load(&data_dir)?.into_store();
    let app = create_router(AppState::new(PayrollEngine::from_store(store)));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, data_dir = %data_dir, "Payroll engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
