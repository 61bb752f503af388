//! Identity of the customer using the storefront.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display name of the current customer.
///
/// The name is trimmed on construction. An empty name means no customer has
/// introduced themselves yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Creates a customer name, trimming surrounding whitespace.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self(name.trim().to_string())
    }

    /// Returns `true` when there is no name to show.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The name to display, or `None` when nothing should be rendered.
    pub fn display(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self.0.as_str())
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CustomerName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for CustomerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<CustomerName> for String {
    fn from(name: CustomerName) -> Self {
        name.0
    }
}
