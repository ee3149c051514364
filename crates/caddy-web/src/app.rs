//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{ArrowLeft, Footer};
use crate::pages::{CheckoutPage, HomePage, SuccessPage};

/// Root application component
///
/// `/checkout/success` is where Stripe lands the browser after payment;
/// cancelling sends it back to `/checkout?canceled=true`.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                    <Route path=path!("/checkout/success") view=SuccessPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Unknown client-side route
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <span class="section-label">"404"</span>
            <h1>"This hole isn't on the card."</h1>
            <p>"The page you were looking for doesn't exist."</p>
            <a href="/" class="btn btn-gold">
                <ArrowLeft />
                " Back to PaisaCaddy"
            </a>
            <Footer />
        </div>
    }
}
