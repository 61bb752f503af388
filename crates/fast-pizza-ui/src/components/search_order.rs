//! Order search box shown in the header.

use fast_pizza_core::{Result, order_route};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::warn;

use crate::navigation::{NavigationContext, use_navigation};
use crate::theme;

/// Placeholder of the search input.
pub const SEARCH_PLACEHOLDER: &str = "Search order #";

/// Navigate to the order named by `query`.
///
/// Returns `Ok(true)` if a navigation happened and `Ok(false)` for a blank
/// query.
pub fn submit_order_search(navigation: &NavigationContext, query: &str) -> Result<bool> {
    match order_route(query)? {
        Some(route) => {
            navigation.navigate(route);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Search box that jumps to an order's status page.
#[component]

pub fn SearchOrder() -> impl IntoView {
    let navigation = use_navigation();
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match submit_order_search(&navigation, &query.get_untracked()) {
            Ok(true) => set_query.set(String::new()),
            Ok(false) => {}
            // Keep the query so the customer can fix it.
            Err(e) => warn!("Order search rejected: {}", e),
        }
    };

    view! {
        <form on:submit=on_submit data-testid="search-order">
            <input
                type="text"
                class=theme::search_order::INPUT
                placeholder=SEARCH_PLACEHOLDER
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
        </form>
    }
}
