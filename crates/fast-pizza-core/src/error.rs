//! Error types for Fast Pizza core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Fast Pizza core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Path does not match any storefront route.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Order identifier is empty or contains unsupported characters.
    #[error("Invalid order id '{id}': {reason}")]
    InvalidOrderId {
        /// The rejected identifier.
        id: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Client-side navigation could not be recorded.
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an [`Error::InvalidOrderId`].
    pub fn invalid_order_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOrderId {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
