//! Header component.

use fast_pizza_core::{AppRoute, BrandConfig, StorefrontConfig};
use leptos::prelude::*;

use crate::components::{RouteLink, SearchOrder, UserName};
use crate::theme;

/// Storefront top bar: home link with the brand, order search, customer name.
///
/// The brand comes from a [`StorefrontConfig`] context when one is provided.
/// The logo image is only rendered when `show_logo` is set.
#[component]

pub fn Header() -> impl IntoView {
    let BrandConfig {
        label,
        show_logo,
        logo_src,
        logo_alt,
    } = use_context::<StorefrontConfig>()
        .map(|config| config.brand)
        .unwrap_or_default();

    view! {
        <header class=theme::header::CONTAINER>
            <RouteLink to=AppRoute::Home class=theme::header::BRAND_LINK>
                {show_logo.then(|| view! {
                    <img src=logo_src alt=logo_alt class=theme::header::LOGO />
                })}
                <span class=theme::header::BRAND_LABEL>{label}</span>
            </RouteLink>
            <SearchOrder />
            <UserName />
        </header>
    }
}
