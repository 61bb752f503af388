//! UI components for the `Fast Pizza` storefront.

mod header;
mod route_link;
mod search_order;
mod user_name;

pub use header::Header;
pub use route_link::{ClickModifiers, RouteLink, follow_link};
pub use search_order::{SEARCH_PLACEHOLDER, SearchOrder, submit_order_search};
pub use user_name::{UserContext, UserName, UserProvider, use_user};
