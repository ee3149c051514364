//! UI Components

use leptos::prelude::*;

/// Brand account linked from the closing CTA and the footer
pub const TWITTER_HANDLE: &str = "@paisa_golf";
pub const TWITTER_URL: &str = "https://twitter.com/paisa_golf";
pub const CONTACT_MAILTO: &str = "mailto:hello@paisacaddy.com";

#[component]
pub fn ArrowRight() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 16 16" fill="none" class="icon">
            <path
                d="M3 8H13M13 8L9 4M13 8L9 12"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[component]
pub fn ArrowLeft() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 16 16" fill="none" class="icon">
            <path
                d="M13 8H3M3 8L7 4M3 8L7 12"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <svg class="spinner" width="20" height="20" viewBox="0 0 24 24" fill="none">
            <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
            <path
                class="spinner-head"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"
            />
        </svg>
    }
}

#[component]
pub fn CheckIcon() -> impl IntoView {
    view! {
        <svg width="64" height="64" viewBox="0 0 64 64" fill="none">
            <circle cx="32" cy="32" r="30" stroke="currentColor" stroke-width="2" />
            <path
                d="M20 32L28 40L44 24"
                stroke="currentColor"
                stroke-width="3"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

/// Header link back to the landing page
#[component]
pub fn BackHome() -> impl IntoView {
    view! {
        <header class="page-header">
            <a href="/" class="back-link">
                <ArrowLeft />
                " Back to PaisaCaddy"
            </a>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="brand">"PaisaCaddy"</span>
            <div class="footer-links">
                <a href=TWITTER_URL target="_blank" rel="noopener noreferrer">"X / Twitter"</a>
                <a href=CONTACT_MAILTO>"Contact"</a>
            </div>
        </footer>
    }
}
