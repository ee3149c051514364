//! HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::ORIGIN, HeaderMap},
    Json,
};
use serde::Serialize;

use caddy_checkout::{resolve_origin, CheckoutForm, PaymentError};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: state.provider.name().to_string(),
    })
}

/// Create a subscription checkout session
pub async fn create_checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CheckoutForm>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, PaymentError> {
    let Json(form) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Unreadable checkout body");
        PaymentError::InvalidBody(rejection.body_text())
    })?;

    let origin = resolve_origin(
        headers.get(ORIGIN).and_then(|v| v.to_str().ok()),
        &state.default_origin,
    );

    let session = caddy_checkout::create_checkout(state.provider.as_ref(), form, &origin)
        .await
        .map_err(|e| {
            if e.is_client_error() {
                tracing::warn!(error = %e, "Checkout rejected");
            } else {
                tracing::error!(error = %e, "Stripe checkout error");
            }
            e
        })?;

    tracing::info!(session_id = %session.id, %origin, "Checkout session ready");

    Ok(Json(CheckoutResponse { url: session.url }))
}
