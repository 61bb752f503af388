//! `Fast Pizza` UI - Leptos-based storefront interface.
//!
//! This crate provides the storefront shell: the header bar with its home
//! link, order search and customer name, plus client-side navigation.

pub mod app;
pub mod components;
pub mod navigation;
pub mod theme;

pub use app::App;
pub use navigation::{
    BrowserHistory, HistoryBackend, MemoryHistory, NavigationContext, NavigationProvider,
    use_navigation,
};
