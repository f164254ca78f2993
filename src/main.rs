//! HTTP server for the NZ pay engine.
//!
//! Usage: `nz-pay-engine [CONFIG_DIR]`. The configuration directory defaults
//! to `config/nz`; the listen port comes from `PORT` (default 3000). Log
//! filtering follows `RUST_LOG`.

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nz_pay_engine::api::{AppState, create_router};
use nz_pay_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "config/nz";
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
    let loader = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        jurisdiction = %loader.metadata().code,
        tax_year = %loader.metadata().tax_year,
        "Loaded jurisdiction configuration"
    );

    let port = match env::var("PORT") {
        Ok(value) => value.parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let app = create_router(AppState::new(loader.into_config()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
