//! Main application component.

use fast_pizza_core::StorefrontConfig;
use leptos::prelude::*;

use crate::components::{Header, UserProvider};
use crate::navigation::{NavigationProvider, use_navigation};
use crate::theme::layout;

/// Main application component.
#[component]

pub fn App(
    /// Storefront configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<StorefrontConfig>,
) -> impl IntoView {
    provide_context(config.unwrap_or_default());

    view! {
        <NavigationProvider>
            <UserProvider>
                <div class=layout::SHELL>
                    <Header />
                    <main class=layout::MAIN>
                        <CurrentPage />
                    </main>
                </div>
            </UserProvider>
        </NavigationProvider>
    }
}

/// Title of the page the customer is on.
#[component]
fn CurrentPage() -> impl IntoView {
    let current = use_navigation().current();

    view! {
        <div class=layout::PAGE>
            <h1 class=layout::PAGE_TITLE>{move || current.get().title()}</h1>
        </div>
    }
}
