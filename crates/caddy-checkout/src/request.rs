//! Checkout Request
//!
//! The form the browser submits, its validated form, and the redirect URLs
//! Stripe sends the customer back to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{PaymentError, Result};

/// Redirect origin used when the request carries no `Origin` header
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Placeholder Stripe replaces with the real session id on redirect
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Metadata keys read by the SMS backend when provisioning a caddy
pub const META_CUSTOMER_NAME: &str = "customer_name";
pub const META_CUSTOMER_PHONE: &str = "customer_phone";
pub const META_CADDY_NAME: &str = "caddy_name";

/// Raw checkout form as posted by the browser
///
/// Every field is optional here so an absent field is reported the same way
/// as an empty one.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub caddy_name: Option<String>,
}

impl CheckoutForm {
    /// Check that every field is present and non-empty
    ///
    /// Presence only: email and phone syntax are left to Stripe and the SMS
    /// backend.
    pub fn validate(self) -> Result<CheckoutRequest> {
        let mut missing = Vec::new();

        let name = required(self.name, "name", &mut missing);
        let email = required(self.email, "email", &mut missing);
        let phone = required(self.phone, "phone", &mut missing);
        let caddy_name = required(self.caddy_name, "caddyName", &mut missing);

        if !missing.is_empty() {
            return Err(PaymentError::MissingFields(missing));
        }

        Ok(CheckoutRequest {
            name,
            email,
            phone,
            caddy_name,
        })
    }
}

fn required(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// A validated checkout request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Customer's full name
    pub name: String,

    /// Customer email, prefilled on the hosted page
    pub email: String,

    /// Phone number the caddy will text
    pub phone: String,

    /// Display name the customer picked for their caddy
    pub caddy_name: String,
}

/// Where Stripe sends the browser after checkout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl RedirectUrls {
    pub fn for_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            success_url: format!("{origin}/checkout/success?session_id={SESSION_ID_PLACEHOLDER}"),
            cancel_url: format!("{origin}/checkout?canceled=true"),
        }
    }
}

/// Pick the redirect origin for a request
///
/// Browsers send `null` for opaque origins, which is no use as a redirect
/// target.
pub fn resolve_origin(header: Option<&str>, default: &str) -> String {
    match header.map(str::trim) {
        Some(origin) if !origin.is_empty() && origin != "null" => origin.to_string(),
        _ => default.to_string(),
    }
}

/// Everything a provider needs to open a subscription checkout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionCheckout {
    pub customer: CheckoutRequest,
    pub redirects: RedirectUrls,
}

impl SubscriptionCheckout {
    pub fn new(customer: CheckoutRequest, origin: &str) -> Self {
        Self {
            customer,
            redirects: RedirectUrls::for_origin(origin),
        }
    }

    /// Metadata attached to both the session and the subscription
    pub fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([
            (META_CUSTOMER_NAME.to_string(), self.customer.name.clone()),
            (META_CUSTOMER_PHONE.to_string(), self.customer.phone.clone()),
            (META_CADDY_NAME.to_string(), self.customer.caddy_name.clone()),
        ])
    }
}

/// Result of creating a checkout session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostedSession {
    /// Stripe session ID
    pub id: String,

    /// URL to redirect user to
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, phone: &str, caddy_name: &str) -> CheckoutForm {
        CheckoutForm {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            caddy_name: Some(caddy_name.into()),
        }
    }

    #[test]
    fn test_complete_form_validates() {
        let request = form("John Smith", "john@example.com", "+15551234567", "Ace")
            .validate()
            .unwrap();
        assert_eq!(request.name, "John Smith");
        assert_eq!(request.caddy_name, "Ace");
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let err = form("", "a@b.com", "1", "X").validate().unwrap_err();
        match err {
            PaymentError::MissingFields(fields) => assert_eq!(fields, vec!["name"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_absent_fields_are_rejected() {
        let parsed: CheckoutForm =
            serde_json::from_str(r#"{"email":"a@b.com","caddyName":null}"#).unwrap();
        match parsed.validate().unwrap_err() {
            PaymentError::MissingFields(fields) => {
                assert_eq!(fields, vec!["name", "phone", "caddyName"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_format_is_not_checked() {
        assert!(form("J", "not-an-email", "call me", " ").validate().is_ok());
    }

    #[test]
    fn test_redirect_urls() {
        let urls = RedirectUrls::for_origin("https://example.com");
        assert_eq!(
            urls.success_url,
            "https://example.com/checkout/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(urls.cancel_url, "https://example.com/checkout?canceled=true");
    }

    #[test]
    fn test_resolve_origin() {
        assert_eq!(
            resolve_origin(Some("https://example.com"), DEFAULT_ORIGIN),
            "https://example.com"
        );
        assert_eq!(resolve_origin(None, DEFAULT_ORIGIN), "http://localhost:3000");
        assert_eq!(resolve_origin(Some(""), DEFAULT_ORIGIN), "http://localhost:3000");
        assert_eq!(resolve_origin(Some("null"), DEFAULT_ORIGIN), "http://localhost:3000");
    }

    #[test]
    fn test_metadata_carries_fulfillment_fields() {
        let customer = form("John Smith", "john@example.com", "+15551234567", "Ace")
            .validate()
            .unwrap();
        let checkout = SubscriptionCheckout::new(customer, DEFAULT_ORIGIN);
        let metadata = checkout.metadata();

        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata["customer_name"], "John Smith");
        assert_eq!(metadata["customer_phone"], "+15551234567");
        assert_eq!(metadata["caddy_name"], "Ace");
    }
}
