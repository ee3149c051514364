//! # caddy-checkout
//!
//! Subscription checkout for the PaisaCaddy landing site.
//!
//! ## Flow
//!
//! Stripe Checkout (Hosted): the customer leaves the site briefly, pays on
//! Stripe's page, and comes back to the success page.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────────┐
//! │  /checkout  │────▶│  Stripe Hosted  │────▶│  /checkout/success   │
//! │  (4 fields) │     │  Checkout Page  │     │  ?session_id=cs_...  │
//! └─────────────┘     └─────────────────┘     └──────────────────────┘
//!        │                     │
//!        └── cancel ◀──────────┘  /checkout?canceled=true
//! ```
//!
//! Stripe owns the subscription once the session exists. The customer's
//! name, phone and caddy name ride along as metadata on both the session and
//! the subscription for the SMS backend to pick up.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use caddy_checkout::{create_checkout, CheckoutForm, StripeClient};
//!
//! let stripe = StripeClient::from_env()?;
//!
//! let session = create_checkout(&stripe, form, "https://paisacaddy.com").await?;
//!
//! // Redirect user to: session.url
//! ```

mod checkout;
mod error;
mod mock;
mod provider;
mod request;

pub use checkout::{StripeClient, QUANTITY};
pub use error::{
    ErrorResponse, PaymentError, Result, INVALID_BODY_MESSAGE, MISSING_FIELDS_MESSAGE,
    SESSION_FAILED_MESSAGE,
};
pub use mock::RecordingProvider;
pub use provider::{create_checkout, CheckoutProvider};
pub use request::{
    resolve_origin, CheckoutForm, CheckoutRequest, HostedSession, RedirectUrls,
    SubscriptionCheckout, DEFAULT_ORIGIN, SESSION_ID_PLACEHOLDER,
};
