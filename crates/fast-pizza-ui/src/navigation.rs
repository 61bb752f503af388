//! Client-side navigation.
//!
//! Routes are changed by pushing onto a [`HistoryBackend`] and updating a
//! reactive current route, so following a link never reloads the page.

use std::sync::{Arc, Mutex, PoisonError};

use fast_pizza_core::{AppRoute, Result};
use leptos::prelude::*;
use tracing::{debug, warn};

/// Where navigations are recorded.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryBackend: Send + Sync {
    /// Path of the current history entry, if any.
    fn current_path(&self) -> Option<String>;

    /// Push a new history entry without loading it.
    fn push(&self, path: &str) -> Result<()>;
}

/// History backed by the browser's History API (`pushState`).
///
/// Outside the browser it reports no location and ignores pushes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl HistoryBackend for BrowserHistory {
    #[cfg(target_arch = "wasm32")]
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn current_path(&self) -> Option<String> {
        None
    }

    #[cfg(target_arch = "wasm32")]
    fn push(&self, path: &str) -> Result<()> {
        use fast_pizza_core::Error;

        let history = web_sys::window()
            .ok_or_else(|| Error::Navigation("No window available".to_string()))?
            .history()
            .map_err(|e| Error::Navigation(format!("History unavailable: {e:?}")))?;

        history
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            .map_err(|e| Error::Navigation(format!("pushState to {path} failed: {e:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn push(&self, _path: &str) -> Result<()> {
        Ok(())
    }
}

/// In-memory history stack.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    /// Create a history whose only entry is `path`.
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![path.into()]),
        }
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HistoryBackend for MemoryHistory {
    fn current_path(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    fn push(&self, path: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
        Ok(())
    }
}

/// Context holding the current route.
#[derive(Clone)]
pub struct NavigationContext {
    current: ReadSignal<AppRoute>,
    set_current: WriteSignal<AppRoute>,
    history: Arc<dyn HistoryBackend>,
}

impl NavigationContext {
    /// Create a navigation context starting at the history's current path.
    pub fn new(history: Arc<dyn HistoryBackend>) -> Self {
        let (current, set_current) = signal(route_from_history(&*history));
        Self {
            current,
            set_current,
            history,
        }
    }

    /// The current route.
    pub const fn current(&self) -> ReadSignal<AppRoute> {
        self.current
    }

    /// Navigate to `route` without reloading the page.
    ///
    /// A history backend failure is logged; the in-app route still changes.
    pub fn navigate(&self, route: AppRoute) {
        let path = route.path();
        debug!(
            from = %self.current.get_untracked(),
            to = %path,
            "Navigating"
        );

        if let Err(e) = self.history.push(&path) {
            warn!("Failed to record navigation to {}: {}", path, e);
        }

        self.set_current.set(route);
    }

    /// Re-read the route from the history backend, e.g. after back/forward.
    pub fn sync_from_history(&self) {
        self.set_current
            .set(route_from_history(&*self.history));
    }
}

fn route_from_history(history: &dyn HistoryBackend) -> AppRoute {
    let Some(path) = history.current_path() else {
        return AppRoute::Home;
    };

    AppRoute::parse(&path).unwrap_or_else(|e| {
        warn!("{}; starting at home", e);
        AppRoute::Home
    })
}

/// Provider component that sets up the navigation context.
///
/// Uses the browser history unless another backend is given.
#[component]

pub fn NavigationProvider(
    /// History backend to record navigations in.
    #[prop(optional)]
    history: Option<Arc<dyn HistoryBackend>>,
    /// Child components that can access the navigation context.
    children: Children,
) -> impl IntoView {
    let ctx = NavigationContext::new(history.unwrap_or_else(|| Arc::new(BrowserHistory)));
    listen_for_history_changes(ctx.clone());
    provide_context(ctx);

    view! { {children()} }
}

#[cfg(target_arch = "wasm32")]
fn listen_for_history_changes(ctx: NavigationContext) {
    let listener = window_event_listener(leptos::ev::popstate, move |_| {
        ctx.sync_from_history();
    });
    on_cleanup(move || listener.remove());
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_for_history_changes(_ctx: NavigationContext) {}

/// Hook to access the navigation context.
///
/// # Panics
/// Panics if called outside of a `NavigationProvider`.
pub fn use_navigation() -> NavigationContext {
    expect_context::<NavigationContext>()
}
