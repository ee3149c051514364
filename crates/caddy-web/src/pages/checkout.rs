//! Checkout Page

use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_query_map;

use crate::api;
use crate::components::{ArrowRight, BackHome, Spinner};
use crate::form::{CheckoutForm, FormState};

const INCLUDED: [&str; 6] = [
    "Unlimited round tracking",
    "Real-time handicap updates",
    "Club distance tracking",
    "On-course caddy advice",
    "Pattern analysis",
    "Text-based interface",
];

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let (form, set_form) = signal(CheckoutForm::default());
    let (state, set_state) = signal(FormState::Idle);

    let query = use_query_map();
    let canceled = move || query.with(|q| q.get("canceled")).as_deref() == Some("true");

    let busy = move || state.with(FormState::is_busy);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(next) = state.get_untracked().begin_submit() else {
            return;
        };
        set_state.set(next);

        let payload = form.get_untracked();
        leptos::task::spawn_local(async move {
            let result = api::create_checkout(&payload).await;

            let next = match state.get_untracked().finish(result) {
                FormState::Redirecting(url) => match api::redirect(&url) {
                    Ok(()) => FormState::Redirecting(url),
                    Err(message) => FormState::Error(message),
                },
                other => other,
            };
            set_state.set(next);
        });
    };

    view! {
        <div class="checkout">
            <BackHome />

            <main class="checkout-main">
                <div class="checkout-heading">
                    <span class="section-label">"GET STARTED"</span>
                    <h1>"Set Up Your Caddy"</h1>
                    <p>"$40/year. Cancel anytime. Your caddy is ready in seconds."</p>
                </div>

                <Show when=canceled>
                    <div class="notice">"Checkout was canceled. Your card was not charged."</div>
                </Show>

                <form class="checkout-form" on:submit=submit>
                    <div class="field">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            required
                            placeholder="John Smith"
                            disabled=busy
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.name = value);
                            }
                        />
                    </div>

                    <div class="field">
                        <label for="email">"Email Address"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required
                            placeholder="john@example.com"
                            disabled=busy
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.email = value);
                            }
                        />
                    </div>

                    <div class="field">
                        <label for="phone">"Phone Number"</label>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            required
                            placeholder="+1 (555) 123-4567"
                            disabled=busy
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.phone = value);
                            }
                        />
                        <p class="hint">"This is where your caddy will text you"</p>
                    </div>

                    <div class="field">
                        <label for="caddyName">"Name Your Caddy"</label>
                        <input
                            type="text"
                            id="caddyName"
                            name="caddyName"
                            required
                            placeholder="Ace, Birdie, Tiger..."
                            disabled=busy
                            prop:value=move || form.with(|f| f.caddy_name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_form.update(|f| f.caddy_name = value);
                            }
                        />
                        <p class="hint">"Give your AI caddy a name. Make it yours."</p>
                    </div>

                    <Show when=move || state.with(|s| s.error_message().is_some())>
                        <div class="form-error">
                            {move || state.with(|s| s.error_message().unwrap_or_default().to_string())}
                        </div>
                    </Show>

                    <button type="submit" class="btn btn-gold btn-block" disabled=busy>
                        {move || {
                            if busy() {
                                view! { <Spinner /> }.into_any()
                            } else {
                                view! { "Continue to Payment " <ArrowRight /> }.into_any()
                            }
                        }}
                    </button>

                    <p class="fine-print">
                        "By continuing, you agree to our Terms of Service."
                        <br />
                        "Your subscription renews annually at $40/year."
                    </p>
                </form>

                <section class="included">
                    <h3>"What's Included"</h3>
                    <ul>
                        {INCLUDED.iter().map(|item| view! { <li>"✓ " {*item}</li> }).collect_view()}
                    </ul>
                </section>
            </main>
        </div>
    }
}
