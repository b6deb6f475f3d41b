// src/main.rs
use std::sync::Arc;

use dotenvy::dotenv;
use product_catalog::server::bind_listener;
use product_catalog::{routes, AppState, CommerceClient, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error=%e, "Invalid configuration");
            return;
        }
    };

    // Catalog client gets the API key explicitly; nothing is global
    let catalog = match CommerceClient::new(&config.commerce) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error=%e, "Failed to build catalog client");
            return;
        }
    };
    tracing::info!(api_url=%config.commerce.api_url, "Catalog client ready");

    let app = routes::create_router(AppState::new(Arc::new(catalog)));

    let listener = match bind_listener(config.host, config.port).await {
        Ok((listener, addr)) => {
            tracing::info!(%addr, "Serving catalog page");
            listener
        }
        Err(e) => {
            tracing::error!(host=%config.host, port=config.port, error=%e, "No free port to bind");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error=%e, "Server error");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error=%e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
