//! Main App Component

use coach_core::View;
use leptos::prelude::*;

use crate::components::{Footer, Navigation};
use crate::pages::{HomePage, LoginPage, PricingPage};
use crate::store::NavStore;

/// Root application component.
///
/// Owns the navigation state for the lifetime of the mount and renders the
/// page selected by it between the navigation bar and the footer.
#[component]
pub fn App() -> impl IntoView {
    let nav = NavStore::new();
    let current = nav.view_memo();

    let page = move || match current.get() {
        View::Home => view! { <HomePage nav=nav /> }.into_any(),
        View::Pricing => view! { <PricingPage nav=nav /> }.into_any(),
        View::Login => view! { <LoginPage /> }.into_any(),
    };

    view! {
        <div class="min-h-screen bg-slate-950">
            <Navigation nav=nav />
            {page}
            <Footer />
        </div>
    }
}
