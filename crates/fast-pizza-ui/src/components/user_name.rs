//! Current customer's name, shown at the right of the header.

use fast_pizza_core::CustomerName;
use leptos::prelude::*;
use tracing::debug;

use crate::theme;

/// Context for the current customer.
#[derive(Clone, Copy)]
pub struct UserContext {
    /// The customer's name; empty until they introduce themselves.
    pub username: ReadSignal<CustomerName>,
    set_username: WriteSignal<CustomerName>,
}

impl UserContext {
    /// Create a user context.
    pub fn new(initial: CustomerName) -> Self {
        let (username, set_username) = signal(initial);
        Self {
            username,
            set_username,
        }
    }

    /// Change the customer's name.
    pub fn set_username(&self, name: impl Into<CustomerName>) {
        let name = name.into();
        debug!("Customer name set to '{}'", name);
        self.set_username.set(name);
    }
}

/// Provider component that sets up the user context with no customer.
#[component]

pub fn UserProvider(
    /// Child components that can access the user context.
    children: Children,
) -> impl IntoView {
    provide_context(UserContext::new(CustomerName::default()));

    view! { {children()} }
}

/// Hook to access the user context.
///
/// # Panics
/// Panics if called outside of a `UserProvider`.
pub fn use_user() -> UserContext {
    expect_context::<UserContext>()
}

/// Displays the customer's name; renders nothing while it is unknown.
#[component]

pub fn UserName() -> impl IntoView {
    let user = use_context::<UserContext>();

    move || {
        let name = user.map(|ctx| ctx.username.get()).unwrap_or_default();
        name.display().map(|name| {
            let name = name.to_string();
            view! {
                <div class=theme::user_name::LABEL data-testid="user-name">
                    {name}
                </div>
            }
        })
    }
}
