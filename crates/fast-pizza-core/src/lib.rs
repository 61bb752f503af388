//! `Fast Pizza` Core Library
//!
//! Platform-neutral building blocks of the storefront UI:
//! - Typed client-side routes
//! - Order search query interpretation
//! - The current customer's display name
//! - Storefront configuration (brand, logo)
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`], carrying the crate-wide [`Error`].
//!
//! ```rust
//! use fast_pizza_core::{AppRoute, Result};
//!
//! fn landing() -> Result<AppRoute> {
//!     AppRoute::parse("/")
//! }
//!
//! assert_eq!(landing().ok(), Some(AppRoute::Home));
//! ```

pub mod config;
pub mod error;
pub mod route;
pub mod search;
pub mod user;

pub use config::{
    BrandConfig, DEFAULT_BRAND_LABEL, DEFAULT_LOGO_ALT, DEFAULT_LOGO_SRC, StorefrontConfig,
};
pub use error::{Error, Result};
pub use route::{AppRoute, MAX_ORDER_ID_LEN, OrderId};
pub use search::order_route;
pub use user::CustomerName;
