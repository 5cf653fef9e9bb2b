//! portfolio-assistant HTTP server binary.
//!
//! Starts an axum HTTP server exposing the chat assistant and contact form
//! endpoints used by the portfolio site.
//!
//! # Environment Variables
//!
//! - `HOST` / `PORT` — bind address (default: `0.0.0.0:5000`)
//! - `OPENAI_API_KEY` — completion API key; without it only keyword answers are served
//! - `OPENAI_BASE_URL` — completion API root
//! - `OPENAI_TIMEOUT_SECS` — completion request timeout
//! - `RUST_LOG` — Tracing filter (default: "info,portfolio_assistant=debug")
//!
//! # Usage
//!
//! ```bash
//! OPENAI_API_KEY=sk-... cargo run --bin server
//! ```

use anyhow::Context;
use portfolio_assistant::server::{app_router, AppState};
use portfolio_assistant::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_assistant=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        "Completion API key status: {}",
        if config.openai_api_key.is_some() { "Present" } else { "Missing" }
    );

    let state = AppState::from_config(&config).context("failed to build completion client")?;
    let app = app_router(state);

    let bind_addr = config.bind_addr();
    tracing::info!("portfolio-assistant server starting on {}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       — liveness probe");
    tracing::info!("  POST /api/chatbot  — chat assistant");
    tracing::info!("  POST /api/chat     — chat assistant (alias)");
    tracing::info!("  POST /api/contact  — contact form");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
