//! PaisaCaddy HTTP Server
//!
//! Axum-based server for the landing site: serves the WASM frontend and
//! creates Stripe checkout sessions for new caddy subscriptions.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caddy_checkout::{CheckoutProvider, StripeClient};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Payments are the whole point of the server; refuse to start without them
    let stripe = StripeClient::from_env().inspect_err(|e| {
        tracing::error!("{e}");
        tracing::error!("  Set STRIPE_SECRET_KEY and STRIPE_PRICE_ID in .env");
    })?;
    tracing::info!(price_id = stripe.price_id(), "✓ Stripe configured");

    let provider: Arc<dyn CheckoutProvider> = Arc::new(stripe);

    // Build application state
    let state = AppState {
        provider,
        default_origin: Arc::from(config.default_origin.as_str()),
    };

    let app = routes::router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("⛳ PaisaCaddy server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  POST /api/checkout    - Create Stripe checkout");
    tracing::info!("  GET  /*               - Frontend ({})", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
