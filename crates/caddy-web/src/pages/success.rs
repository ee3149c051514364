//! Success Page
//!
//! Cosmetic confirmation only. The session id is displayed, never checked
//! against Stripe.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::CheckIcon;
use crate::form::reference_label;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let reference = move || {
        query
            .with(|q| q.get("session_id"))
            .and_then(|id| reference_label(&id))
    };

    view! {
        <div class="success">
            <div class="success-card">
                <div class="success-icon">
                    <CheckIcon />
                </div>

                <h1>"You're In!"</h1>
                <p class="lead">
                    "Your caddy is being set up. You'll receive a text message within the next few minutes to get started."
                </p>

                <div class="next-steps">
                    <h3>"What happens next:"</h3>
                    <ol>
                        <li>"Check your phone for a welcome text from PaisaCaddy"</li>
                        <li>"Reply with your bag setup to get started"</li>
                        <li>"After your next round, snap and send your scorecard"</li>
                    </ol>
                </div>

                <a href="/" class="back-link">"← Back to PaisaCaddy"</a>

                {move || reference().map(|label| view! { <p class="reference">{label}</p> })}
            </div>
        </div>
    }
}
