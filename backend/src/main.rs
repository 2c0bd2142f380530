//! Todo backend entry point.
//!
//! Loads configuration from the environment (`.env` supported), connects
//! to PostgreSQL, runs migrations, and serves the API until SIGINT.

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use todo_backend::stores::PostgresTodoRepository;
use todo_backend::{router, AppConfig, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = AppConfig::from_env();

    info!(
        "Connecting to PostgreSQL: {}",
        config.database_url.split('@').next_back().unwrap_or("unknown")
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;

    let repository = PostgresTodoRepository::new(pool);
    repository.migrate().await?;
    info!("Migrations complete");

    let allowed_origin: HeaderValue = config.frontend_origin.parse()?;
    let app = router(AppState::new(repository), allowed_origin);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    info!("Allowing cross-origin requests from {}", config.frontend_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve when SIGINT (ctrl-c) arrives, letting axum drain in-flight
/// requests before the process exits.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Unable to listen for shutdown signal: {err}");
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
