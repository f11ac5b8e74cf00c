use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use studiobook::config::AppConfig;
use studiobook::db::BookingRepository;
use studiobook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let bookings = BookingRepository::open(&config.database)
        .with_context(|| format!("Database connection failed: {}", config.database.path))?;
    tracing::info!(path = %config.database.path, "database ready");

    if config.strict_validation {
        tracing::info!("strict form validation enabled");
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState { bookings, config });
    let app = studiobook::app(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
