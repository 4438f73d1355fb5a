//! Main App Component

use checkout_flow::CheckoutAppearance;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::DepositPage;
use crate::theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Theme variables are read once at startup
    provide_context(CheckoutAppearance::themed(&theme::resolve()));

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=DepositPage />
                </Routes>
            </main>
        </Router>
    }
}
