//! Link component for client-side navigation.

use fast_pizza_core::AppRoute;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::navigation::{NavigationContext, use_navigation};

/// Mouse button and modifier keys of a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// Pressed button (0 = primary).
    pub button: i16,
    /// Control key held.
    pub ctrl: bool,
    /// Meta/command key held.
    pub meta: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt/option key held.
    pub alt: bool,
    /// Another handler already cancelled the default action.
    pub default_prevented: bool,
}

impl ClickModifiers {
    /// Read button and modifiers from a DOM click event.
    pub fn from_event(ev: &MouseEvent) -> Self {
        Self {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
            default_prevented: ev.default_prevented(),
        }
    }

    /// A primary-button click with no modifier keys whose default action is
    /// still pending.
    ///
    /// Anything else (new tab, new window, download, a click already handled
    /// elsewhere) is left alone.
    pub const fn is_plain_primary_click(&self) -> bool {
        self.button == 0
            && !self.ctrl
            && !self.meta
            && !self.shift
            && !self.alt
            && !self.default_prevented
    }
}

/// Handle a click on a link to `to`.
///
/// Returns `true` when the click was turned into a client-side navigation,
/// in which case the browser's default action must be prevented.
pub fn follow_link(navigation: &NavigationContext, to: &AppRoute, click: ClickModifiers) -> bool {
    if !click.is_plain_primary_click() {
        return false;
    }

    navigation.navigate(to.clone());
    true
}

/// Anchor that navigates within the app without reloading the page.
#[component]

pub fn RouteLink(
    /// Route to navigate to.
    to: AppRoute,
    /// CSS classes for the anchor.
    #[prop(optional, into)]
    class: String,
    /// Link content.
    children: Children,
) -> impl IntoView {
    let navigation = use_navigation();
    let href = to.path();

    let on_click = move |ev: MouseEvent| {
        if follow_link(&navigation, &to, ClickModifiers::from_event(&ev)) {
            ev.prevent_default();
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use leptos::tachys::view::RenderHtml;

    use super::*;
    use crate::navigation::{MemoryHistory, MockHistoryBackend};

    #[test]
    fn test_plain_click() {
        assert!(ClickModifiers::default().is_plain_primary_click());
    }

    #[test]
    fn test_modified_clicks_are_left_to_browser() {
        let plain = ClickModifiers::default();
        for click in [
            ClickModifiers { button: 1, ..plain },
            ClickModifiers { ctrl: true, ..plain },
            ClickModifiers { meta: true, ..plain },
            ClickModifiers { shift: true, ..plain },
            ClickModifiers { alt: true, ..plain },
            ClickModifiers {
                default_prevented: true,
                ..plain
            },
        ] {
            assert!(!click.is_plain_primary_click(), "{click:?}");
        }
    }

    #[test]
    fn test_follow_link_pushes_root_path() {
        Owner::new().with(|| {
            let mut mock = MockHistoryBackend::new();
            mock.expect_current_path()
                .return_const(Some("/menu".to_string()));
            mock.expect_push()
                .withf(|path| path == "/")
                .times(1)
                .returning(|_| Ok(()));

            let nav = NavigationContext::new(Arc::new(mock));
            assert!(follow_link(&nav, &AppRoute::Home, ClickModifiers::default()));
            assert_eq!(nav.current().get_untracked(), AppRoute::Home);
        });
    }

    #[test]
    fn test_modified_click_does_not_navigate() {
        Owner::new().with(|| {
            let history = Arc::new(MemoryHistory::starting_at("/menu"));
            let nav = NavigationContext::new(history.clone());

            let click = ClickModifiers {
                ctrl: true,
                ..ClickModifiers::default()
            };
            assert!(!follow_link(&nav, &AppRoute::Home, click));
            assert_eq!(history.entries(), vec!["/menu"]);
            assert_eq!(nav.current().get_untracked(), AppRoute::Menu);
        });
    }

    #[test]
    fn test_already_handled_click_does_not_navigate() {
        Owner::new().with(|| {
            let mut mock = MockHistoryBackend::new();
            mock.expect_current_path()
                .return_const(Some("/menu".to_string()));
            mock.expect_push().times(0);

            let nav = NavigationContext::new(Arc::new(mock));
            let click = ClickModifiers {
                default_prevented: true,
                ..ClickModifiers::default()
            };
            assert!(!follow_link(&nav, &AppRoute::Home, click));
            assert_eq!(nav.current().get_untracked(), AppRoute::Menu);
        });
    }

    #[test]
    fn test_renders_anchor_with_route_path() {
        let html = Owner::new().with(|| {
            provide_context(NavigationContext::new(Arc::new(MemoryHistory::default())));
            view! { <RouteLink to=AppRoute::Cart class="link">"Cart"</RouteLink> }.to_html()
        });

        assert!(html.contains("<a"));
        assert!(html.contains(r#"href="/cart""#));
        assert!(html.contains(r#"class="link""#));
        assert!(html.contains("Cart"));
    }
}
