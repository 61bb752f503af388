//! Storefront configuration.
//!
//! Handles loading and validating the settings that shape the storefront
//! chrome, such as the brand shown in the header.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Default brand label shown in the header.
pub const DEFAULT_BRAND_LABEL: &str = "🍕 Fast React Pizza Co.";

/// Default logo image location.
pub const DEFAULT_LOGO_SRC: &str = "/logo.png";

/// Default alternative text for the logo image.
pub const DEFAULT_LOGO_ALT: &str = "Fast Pizza Logo";

/// Brand shown at the left of the header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandConfig {
    /// Text label, rendered next to the logo.
    #[serde(default = "default_label")]
    pub label: String,
    /// Whether the logo image is rendered. Off by default.
    #[serde(default)]
    pub show_logo: bool,
    /// Logo image source.
    #[serde(default = "default_logo_src")]
    pub logo_src: String,
    /// Alternative text for the logo image.
    #[serde(default = "default_logo_alt")]
    pub logo_alt: String,
}

fn default_label() -> String {
    DEFAULT_BRAND_LABEL.to_string()
}

fn default_logo_src() -> String {
    DEFAULT_LOGO_SRC.to_string()
}

fn default_logo_alt() -> String {
    DEFAULT_LOGO_ALT.to_string()
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
            show_logo: false,
            logo_src: default_logo_src(),
            logo_alt: default_logo_alt(),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Brand settings.
    #[serde(default)]
    pub brand: BrandConfig,
}

impl StorefrontConfig {
    /// Parse and validate a configuration from a JSON document.
    ///
    /// Every field is optional; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        debug!("Parsed storefront config: {:?}", config.brand);
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!("Loaded storefront config from {}", path.display());
        Ok(config)
    }

    /// Check that the configuration can be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.brand.label.trim().is_empty() {
            return Err(Error::Configuration(
                "Brand label cannot be empty".to_string(),
            ));
        }

        if self.brand.show_logo && self.brand.logo_src.trim().is_empty() {
            return Err(Error::Configuration(
                "Logo source is required when the logo is shown".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.brand.label, "🍕 Fast React Pizza Co.");
        assert!(!config.brand.show_logo);
        assert_eq!(config.brand.logo_src, "/logo.png");
        assert_eq!(config.brand.logo_alt, "Fast Pizza Logo");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StorefrontConfig::from_json_str("{}").expect("Should parse");
        assert_eq!(config, StorefrontConfig::default());

        let config =
            StorefrontConfig::from_json_str(r#"{"brand": {}}"#).expect("Should parse");
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_brand_keeps_other_defaults() {
        let config = StorefrontConfig::from_json_str(r#"{"brand": {"show_logo": true}}"#)
            .expect("Should parse");
        assert!(config.brand.show_logo);
        assert_eq!(config.brand.label, DEFAULT_BRAND_LABEL);
        assert_eq!(config.brand.logo_src, DEFAULT_LOGO_SRC);
    }

    #[test]
    fn test_config_serialization() {
        let config = StorefrontConfig {
            brand: BrandConfig {
                label: "Slice House".to_string(),
                show_logo: true,
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&config).expect("Should serialize");
        let deserialized = StorefrontConfig::from_json_str(&json).expect("Should deserialize");

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let result = StorefrontConfig::from_json_str(r#"{"brand": {"label": "  "}}"#);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_logo_without_source_is_rejected() {
        let result =
            StorefrontConfig::from_json_str(r#"{"brand": {"show_logo": true, "logo_src": ""}}"#);
        assert!(matches!(result, Err(Error::Configuration(_))));

        // Hidden logo does not need a source.
        let result =
            StorefrontConfig::from_json_str(r#"{"brand": {"show_logo": false, "logo_src": ""}}"#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_malformed_json_is_configuration_error() {
        let result = StorefrontConfig::from_json_str("{ brand");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("storefront.json");
        fs::write(&path, r#"{"brand": {"label": "Pizza Planet"}}"#).expect("Should write");

        let config = StorefrontConfig::load(&path).expect("Should load");
        assert_eq!(config.brand.label, "Pizza Planet");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let result = StorefrontConfig::load(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
