//! Fast Pizza UI entry point for WASM.

#![no_main]

use fast_pizza_core::StorefrontConfig;
use fast_pizza_ui::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Id of the `<script type="application/json">` element holding the config.
const CONFIG_ELEMENT_ID: &str = "storefront-config";

/// Entry point for the WASM application.
/// This function is called automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();

    let config = read_config();

    // Remove the loading placeholder
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(loading) = document.get_element_by_id("loading")
    {
        loading.remove();
    }

    mount_to_body(move || view! { <App config=config /> });
}

/// Read the storefront config embedded in the page, falling back to defaults.
fn read_config() -> StorefrontConfig {
    let Some(json) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        return StorefrontConfig::default();
    };

    StorefrontConfig::from_json_str(&json).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Invalid storefront config, using defaults: {e}").into());
        StorefrontConfig::default()
    })
}
