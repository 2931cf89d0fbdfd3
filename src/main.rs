use std::env;

use station_rota::api::{AppState, create_router};
use station_rota::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "./config/rota.yaml";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = env::var("ROTA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let addr = env::var("ROTA_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_path)?;
    info!(
        config = %config_path,
        open = %config.store_hours().open,
        close = %config.store_hours().close,
        break_minutes = config.break_minutes(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
