//! Client-side routes of the storefront.
//!
//! Every navigation target in the UI is an [`AppRoute`]; paths are only
//! produced and consumed at the edges (links, browser history).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum accepted length of an order identifier.
pub const MAX_ORDER_ID_LEN: usize = 64;

/// Path segment of the checkout page under `/order/`; never an order id.
const NEW_ORDER_SEGMENT: &str = "new";

/// Identifier of a placed order, as shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Validates and wraps an order identifier.
    ///
    /// Accepts ASCII letters, digits, `-` and `_`. Case is preserved.
    /// `new` is reserved: `/order/new` is the checkout page.
    pub fn parse(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(Error::invalid_order_id(id, "Order id cannot be empty"));
        }

        if id == NEW_ORDER_SEGMENT {
            return Err(Error::invalid_order_id(id, "Order id is reserved"));
        }

        if id.len() > MAX_ORDER_ID_LEN {
            return Err(Error::invalid_order_id(id, "Order id too long"));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::invalid_order_id(
                id,
                "Order id contains invalid characters",
            ));
        }

        Ok(Self(id.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// Landing page (`/`).
    #[default]
    Home,
    /// Pizza menu (`/menu`).
    Menu,
    /// Shopping cart (`/cart`).
    Cart,
    /// Order checkout form (`/order/new`).
    NewOrder,
    /// Status page of an existing order (`/order/:id`).
    Order {
        /// The order being looked up.
        id: OrderId,
    },
}

impl AppRoute {
    /// Returns the path this route is served at.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Menu => "/menu".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::NewOrder => "/order/new".to_string(),
            Self::Order { id } => format!("/order/{id}"),
        }
    }

    /// Parses a location path into a route.
    ///
    /// A `?query` or `#fragment` suffix and a single trailing slash are
    /// ignored. The empty path is the home page.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = if trimmed.len() > 1 {
            trimmed.strip_suffix('/').unwrap_or(trimmed)
        } else {
            trimmed
        };

        match trimmed {
            "" | "/" => Ok(Self::Home),
            "/menu" => Ok(Self::Menu),
            "/cart" => Ok(Self::Cart),
            "/order/new" => Ok(Self::NewOrder),
            other => match other.strip_prefix("/order/") {
                Some(id) if !id.contains('/') => OrderId::parse(id)
                    .map(|id| Self::Order { id })
                    .map_err(|_| Error::UnknownRoute(path.to_string())),
                _ => Err(Error::UnknownRoute(path.to_string())),
            },
        }
    }

    /// Human-readable page title.
    pub fn title(&self) -> String {
        match self {
            Self::Home => "Home".to_string(),
            Self::Menu => "Menu".to_string(),
            Self::Cart => "Your cart".to_string(),
            Self::NewOrder => "New order".to_string(),
            Self::Order { id } => format!("Order #{id}"),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
