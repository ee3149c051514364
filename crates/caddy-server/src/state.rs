//! Application State

use std::sync::Arc;

use caddy_checkout::CheckoutProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Hosted checkout provider (Stripe in production)
    pub provider: Arc<dyn CheckoutProvider>,

    /// Redirect origin used when a request has no `Origin` header
    pub default_origin: Arc<str>,
}
