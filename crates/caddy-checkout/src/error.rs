//! Checkout Error Types

use serde::Serialize;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Client-facing message for a form with empty or absent fields
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// Client-facing message for a body that is not a checkout form
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Client-facing message for any provider-side failure
pub const SESSION_FAILED_MESSAGE: &str = "Failed to create checkout session";

/// Checkout-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// One or more form fields were empty or absent
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Request body could not be read as a checkout form
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Stripe API error (network, auth, bad price id, ...)
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Whether the caller sent something we refuse to forward
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaymentError::MissingFields(_) | PaymentError::InvalidBody(_))
    }

    /// Get user-friendly message
    ///
    /// Provider and configuration details are never exposed.
    pub fn user_message(&self) -> &'static str {
        match self {
            PaymentError::MissingFields(_) => MISSING_FIELDS_MESSAGE,
            PaymentError::InvalidBody(_) => INVALID_BODY_MESSAGE,
            PaymentError::Stripe(_) | PaymentError::Config(_) => SESSION_FAILED_MESSAGE,
        }
    }
}

/// JSON error body returned to the browser
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&PaymentError> for ErrorResponse {
    fn from(err: &PaymentError) -> Self {
        Self {
            error: err.user_message().to_string(),
        }
    }
}

#[cfg(feature = "axum-handlers")]
impl axum::response::IntoResponse for PaymentError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.is_client_error() {
            axum::http::StatusCode::BAD_REQUEST
        } else {
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, axum::Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_lists_every_field() {
        let err = PaymentError::MissingFields(vec!["name", "caddyName"]);
        assert_eq!(err.to_string(), "Missing required fields: name, caddyName");
        assert_eq!(err.user_message(), "All fields are required");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_stripe_detail_is_not_user_facing() {
        let err = PaymentError::Stripe("No such price: 'price_bogus'".into());
        assert_eq!(err.user_message(), "Failed to create checkout session");
        assert!(!err.is_client_error());

        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Failed to create checkout session" }));
    }
}
