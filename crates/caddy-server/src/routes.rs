//! Router

use std::path::Path;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{create_checkout, health_check};
use crate::state::AppState;

/// Build the full application router
///
/// Unknown paths fall back to `index.html` so client-side routes
/// (`/checkout`, `/checkout/success`) load the WASM app.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let frontend = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(health_check))

        // Checkout
        .route("/api/checkout", post(create_checkout))
        .route(
            "/checkout",
            post(create_checkout).fallback_service(frontend.clone()),
        )

        // Static files (WASM frontend)
        .fallback_service(frontend)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
