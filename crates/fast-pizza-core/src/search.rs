//! Order search.
//!
//! Turns what a customer typed into the header's search box into the route
//! of the order they are looking for.

use tracing::debug;

use crate::error::Result;
use crate::route::{AppRoute, OrderId};

/// Interprets an order search query.
///
/// Surrounding whitespace is ignored and a leading `#` is accepted, since
/// order numbers are displayed as `#ID`. Returns `Ok(None)` for a blank
/// query, in which case no navigation should happen.
pub fn order_route(query: &str) -> Result<Option<AppRoute>> {
    let query = query.trim();
    let query = query.strip_prefix('#').unwrap_or(query);

    if query.is_empty() {
        return Ok(None);
    }

    let id = OrderId::parse(query)?;
    debug!("Search resolved to order {}", id);
    Ok(Some(AppRoute::Order { id }))
}
