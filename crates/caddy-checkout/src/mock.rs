//! Recording Checkout Provider
//!
//! For tests and local demos. Remembers every checkout it is asked to open.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{PaymentError, Result};
use crate::provider::CheckoutProvider;
use crate::request::{HostedSession, SubscriptionCheckout};

#[derive(Debug)]
enum Outcome {
    Hosted(String),
    Fail(String),
}

/// Provider that records calls and answers with a fixed outcome
#[derive(Debug)]
pub struct RecordingProvider {
    outcome: Outcome,
    calls: Mutex<Vec<SubscriptionCheckout>>,
}

impl RecordingProvider {
    /// Every session resolves to `url`
    pub fn returning(url: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Hosted(url.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if Stripe were unreachable
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Checkouts received so far, oldest first
    pub async fn calls(&self) -> Vec<SubscriptionCheckout> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl CheckoutProvider for RecordingProvider {
    async fn create_subscription_session(
        &self,
        checkout: &SubscriptionCheckout,
    ) -> Result<HostedSession> {
        let mut calls = self.calls.lock().await;
        calls.push(checkout.clone());

        match &self.outcome {
            Outcome::Hosted(url) => Ok(HostedSession {
                id: format!("cs_test_{:04}", calls.len()),
                url: url.clone(),
            }),
            Outcome::Fail(message) => Err(PaymentError::Stripe(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "Recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{CheckoutRequest, DEFAULT_ORIGIN};

    fn checkout() -> SubscriptionCheckout {
        SubscriptionCheckout::new(
            CheckoutRequest {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                phone: "+15550000000".into(),
                caddy_name: "Birdie".into(),
            },
            DEFAULT_ORIGIN,
        )
    }

    #[tokio::test]
    async fn test_session_ids_are_sequential() {
        let provider = RecordingProvider::returning("https://checkout.stripe.com/pay");

        let first = provider.create_subscription_session(&checkout()).await.unwrap();
        let second = provider.create_subscription_session(&checkout()).await.unwrap();

        assert_eq!(first.id, "cs_test_0001");
        assert_eq!(second.id, "cs_test_0002");
        assert_eq!(provider.call_count().await, 2);
    }
}
