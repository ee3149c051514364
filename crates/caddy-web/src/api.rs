//! API Client

use crate::form::{error_from_body, CheckoutForm, FALLBACK_ERROR};

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Create a Stripe checkout session, returning the hosted page URL
pub async fn create_checkout(form: &CheckoutForm) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/checkout", origin()))
        .json(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let ok = response.status().is_success();
    let data: Option<serde_json::Value> = response.json().await.ok();

    if ok {
        data.as_ref()
            .and_then(|d| d["url"].as_str())
            .map(str::to_string)
            .ok_or_else(|| FALLBACK_ERROR.to_string())
    } else {
        Err(error_from_body(data.as_ref()))
    }
}

/// Full browser navigation to the hosted checkout page
pub fn redirect(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| FALLBACK_ERROR.to_string())?;
    window
        .location()
        .set_href(url)
        .map_err(|_| FALLBACK_ERROR.to_string())
}
