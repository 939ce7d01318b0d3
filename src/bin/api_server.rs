// src/bin/api_server.rs

use productos_api::storage::schema;
use productos_api::transport;
use productos_api::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // --- Configuration ---
    let config = Config::from_env()?;
    tracing::info!(database = ?config.database, retry = ?config.retry, "Configuration loaded");

    let app_state = transport::http::AppState::new(&config);

    // --- Schema Initialization (fatal on failure) ---
    if let Err(e) = schema::initialize(&app_state.acquirer, config.startup_delay).await {
        tracing::error!(error = %e, "Schema initialization failed, aborting startup");
        return Err(e.into());
    }

    // --- API Server Initialization ---
    let app = transport::http::create_app(app_state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("API server listening on http://{}", config.bind_addr);
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.bind_addr.port()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Could not listen for the shutdown signal");
            }
            tracing::info!("Shutdown signal received (Ctrl+C)");
        })
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}
