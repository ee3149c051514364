//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach for the caddy
//! subscription: one recurring price, prefilled email, fulfillment metadata.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionPaymentMethodTypes, CreateCheckoutSessionSubscriptionData,
};

use crate::error::{PaymentError, Result};
use crate::provider::CheckoutProvider;
use crate::request::{HostedSession, SubscriptionCheckout};

/// Seats per subscription
pub const QUANTITY: u64 = 1;

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
    price_id: String,
}

impl StripeClient {
    /// Create a new Stripe client for a recurring price
    pub fn new(secret_key: &str, price_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(secret_key),
            price_id: price_id.into(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| PaymentError::Config(format!("{key} not set")))
        };

        let secret_key = required("STRIPE_SECRET_KEY")?;
        let price_id = required("STRIPE_PRICE_ID")?;

        Ok(Self::new(&secret_key, price_id))
    }

    /// Recurring price every session is created for
    pub fn price_id(&self) -> &str {
        &self.price_id
    }

    /// Build the session-creation parameters for a checkout
    pub fn session_params<'a>(&'a self, checkout: &'a SubscriptionCheckout) -> CreateCheckoutSession<'a> {
        let metadata = checkout.metadata();

        let mut params = CreateCheckoutSession::new();
        params.mode = Some(CheckoutSessionMode::Subscription);
        params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);
        params.customer_email = Some(&checkout.customer.email);
        params.success_url = Some(&checkout.redirects.success_url);
        params.cancel_url = Some(&checkout.redirects.cancel_url);

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            price: Some(self.price_id.clone()),
            quantity: Some(QUANTITY),
            ..Default::default()
        }]);

        // Same metadata on the subscription so it survives past the session
        params.subscription_data = Some(CreateCheckoutSessionSubscriptionData {
            metadata: Some(metadata.clone()),
            ..Default::default()
        });
        params.metadata = Some(metadata);

        params
    }
}

#[async_trait]
impl CheckoutProvider for StripeClient {
    async fn create_subscription_session(
        &self,
        checkout: &SubscriptionCheckout,
    ) -> Result<HostedSession> {
        let params = self.session_params(checkout);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let url = session.url.ok_or_else(|| {
            PaymentError::Stripe("No checkout URL returned".into())
        })?;

        tracing::info!(
            session_id = %session.id,
            caddy = %checkout.customer.caddy_name,
            "Created Stripe checkout session"
        );

        Ok(HostedSession {
            id: session.id.to_string(),
            url,
        })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CheckoutRequest;

    fn checkout() -> SubscriptionCheckout {
        SubscriptionCheckout::new(
            CheckoutRequest {
                name: "John Smith".into(),
                email: "john@example.com".into(),
                phone: "+15551234567".into(),
                caddy_name: "Ace".into(),
            },
            "https://example.com",
        )
    }

    #[tokio::test]
    async fn test_session_params() {
        let client = StripeClient::new("sk_test_123", "price_caddy_annual");
        let checkout = checkout();
        let params = client.session_params(&checkout);

        assert_eq!(params.mode, Some(CheckoutSessionMode::Subscription));
        assert_eq!(params.customer_email, Some("john@example.com"));
        assert_eq!(
            params.success_url,
            Some("https://example.com/checkout/success?session_id={CHECKOUT_SESSION_ID}")
        );
        assert_eq!(params.cancel_url, Some("https://example.com/checkout?canceled=true"));

        let line_items = params.line_items.as_ref().unwrap();
        assert_eq!(line_items.len(), 1);
        assert_eq!(line_items[0].price.as_deref(), Some("price_caddy_annual"));
        assert_eq!(line_items[0].quantity, Some(1));

        let expected = checkout.metadata();
        assert_eq!(params.metadata.as_ref(), Some(&expected));
        let subscription = params.subscription_data.as_ref().unwrap();
        assert_eq!(subscription.metadata.as_ref(), Some(&expected));
    }

    #[tokio::test]
    async fn test_from_lookup_requires_both_keys() {
        let only_key = StripeClient::from_lookup(|key| {
            (key == "STRIPE_SECRET_KEY").then(|| "sk_test_123".to_string())
        });
        assert!(matches!(only_key, Err(PaymentError::Config(msg)) if msg.contains("STRIPE_PRICE_ID")));

        let empty_key = StripeClient::from_lookup(|key| match key {
            "STRIPE_SECRET_KEY" => Some(String::new()),
            _ => Some("price_caddy_annual".into()),
        });
        assert!(matches!(empty_key, Err(PaymentError::Config(_))));

        let client = StripeClient::from_lookup(|key| match key {
            "STRIPE_SECRET_KEY" => Some("sk_test_123".into()),
            _ => Some("price_caddy_annual".into()),
        })
        .unwrap();
        assert_eq!(client.price_id(), "price_caddy_annual");
    }
}
