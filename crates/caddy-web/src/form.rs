//! Checkout Form State
//!
//! Plain data and transitions behind the checkout and success pages, kept
//! free of Leptos so they can be tested natively.

use serde::Serialize;

/// Shown when the server gives no usable error message
pub const FALLBACK_ERROR: &str = "Something went wrong";

/// Characters of the session id shown on the success page
pub const REFERENCE_LEN: usize = 20;

/// The four fields posted to `/api/checkout`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub caddy_name: String,
}

/// Submission state of the checkout form
///
/// ```text
/// Idle ──submit──▶ Submitting ──ok──▶ Redirecting(url)
///   ▲                  │
///   └──── Error(msg) ◀─┘ err   (submit again from Error)
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Redirecting(String),
}

impl FormState {
    /// State after the user presses submit, or `None` if a request is
    /// already in flight or the browser is leaving the page
    pub fn begin_submit(&self) -> Option<Self> {
        match self {
            FormState::Idle | FormState::Error(_) => Some(FormState::Submitting),
            FormState::Submitting | FormState::Redirecting(_) => None,
        }
    }

    /// State once the checkout request settles
    pub fn finish(self, result: Result<String, String>) -> Self {
        match (self, result) {
            (FormState::Submitting, Ok(url)) => FormState::Redirecting(url),
            (FormState::Submitting, Err(message)) => FormState::Error(message),
            (other, _) => other,
        }
    }

    /// Inputs and button are disabled
    pub fn is_busy(&self) -> bool {
        matches!(self, FormState::Submitting | FormState::Redirecting(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Error text from a failed response body, falling back to a generic message
pub fn error_from_body(body: Option<&serde_json::Value>) -> String {
    body.and_then(|data| data.get("error"))
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(FALLBACK_ERROR)
        .to_string()
}

/// Shortened session id for the success page
pub fn reference_label(session_id: &str) -> Option<String> {
    if session_id.is_empty() {
        return None;
    }
    let prefix: String = session_id.chars().take(REFERENCE_LEN).collect();
    Some(format!("Reference: {prefix}..."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_serializes_camel_case() {
        let form = CheckoutForm {
            name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: "+15551234567".into(),
            caddy_name: "Ace".into(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["caddyName"], "Ace");
        assert!(json.get("caddy_name").is_none());
    }

    #[test]
    fn test_submit_success_redirects() {
        let state = FormState::Idle.begin_submit().unwrap();
        assert!(state.is_busy());

        let state = state.finish(Ok("https://checkout.stripe.com/pay".into()));
        assert_eq!(state, FormState::Redirecting("https://checkout.stripe.com/pay".into()));
        assert!(state.is_busy());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_submit_failure_reenables_form() {
        let state = FormState::Submitting.finish(Err("All fields are required".into()));
        assert_eq!(state.error_message(), Some("All fields are required"));
        assert!(!state.is_busy());
        assert_eq!(state.begin_submit(), Some(FormState::Submitting));
    }

    #[test]
    fn test_double_submit_is_ignored() {
        assert!(FormState::Submitting.begin_submit().is_none());
    }

    #[test]
    fn test_error_from_body() {
        let body = serde_json::json!({ "error": "Failed to create checkout session" });
        assert_eq!(error_from_body(Some(&body)), "Failed to create checkout session");
        assert_eq!(error_from_body(Some(&serde_json::json!({}))), FALLBACK_ERROR);
        assert_eq!(error_from_body(None), FALLBACK_ERROR);
    }

    #[test]
    fn test_reference_label_truncates() {
        let label = reference_label("cs_test_a1B2c3D4e5F6g7H8i9J0").unwrap();
        assert_eq!(label, "Reference: cs_test_a1B2c3D4e5F6...");
        assert_eq!(reference_label("cs_1").unwrap(), "Reference: cs_1...");
        assert!(reference_label("").is_none());
    }
}
