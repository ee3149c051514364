//! Checkout Provider
//!
//! The seam between the HTTP layer and whatever hosts the payment page.

use async_trait::async_trait;

use crate::error::Result;
use crate::request::{CheckoutForm, HostedSession, SubscriptionCheckout};

/// Hosted checkout provider (Strategy pattern)
///
/// The provider owns the subscription from the moment a session is created;
/// nothing about it is kept locally.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Open a recurring checkout session and return its hosted URL
    async fn create_subscription_session(
        &self,
        checkout: &SubscriptionCheckout,
    ) -> Result<HostedSession>;

    /// Provider name
    fn name(&self) -> &str;
}

/// Validate a submitted form and open a session for it
///
/// A form that fails validation never reaches the provider. Otherwise exactly
/// one session is created; there is no retry and no idempotency key.
pub async fn create_checkout(
    provider: &dyn CheckoutProvider,
    form: CheckoutForm,
    origin: &str,
) -> Result<HostedSession> {
    let customer = form.validate()?;
    let checkout = SubscriptionCheckout::new(customer, origin);

    tracing::debug!(
        provider = provider.name(),
        success_url = %checkout.redirects.success_url,
        "Creating subscription checkout"
    );

    provider.create_subscription_session(&checkout).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaymentError;
    use crate::mock::RecordingProvider;

    fn scenario_a() -> CheckoutForm {
        CheckoutForm {
            name: Some("John Smith".into()),
            email: Some("john@example.com".into()),
            phone: Some("+15551234567".into()),
            caddy_name: Some("Ace".into()),
        }
    }

    #[tokio::test]
    async fn test_valid_form_makes_one_call() {
        let provider = RecordingProvider::returning("https://checkout.stripe.com/c/pay/cs_test_a1");

        let session = create_checkout(&provider, scenario_a(), "https://example.com")
            .await
            .unwrap();
        assert_eq!(session.url, "https://checkout.stripe.com/c/pay/cs_test_a1");

        let calls = provider.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].customer.email, "john@example.com");
        assert_eq!(
            calls[0].redirects.success_url,
            "https://example.com/checkout/success?session_id={CHECKOUT_SESSION_ID}"
        );
        assert_eq!(calls[0].redirects.cancel_url, "https://example.com/checkout?canceled=true");
    }

    #[tokio::test]
    async fn test_invalid_form_skips_provider() {
        let provider = RecordingProvider::returning("https://checkout.stripe.com/never");
        let form = CheckoutForm {
            name: Some(String::new()),
            email: Some("a@b.com".into()),
            phone: Some("1".into()),
            caddy_name: Some("X".into()),
        };

        let result = create_checkout(&provider, form, "https://example.com").await;
        assert!(matches!(result, Err(PaymentError::MissingFields(_))));
        assert_eq!(provider.call_count().await, 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_returned() {
        let provider = RecordingProvider::failing("connection reset by peer");

        let result = create_checkout(&provider, scenario_a(), "https://example.com").await;
        assert!(matches!(result, Err(PaymentError::Stripe(_))));
        assert_eq!(provider.call_count().await, 1);
    }
}
