//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use woods_commerce::checkout::{ShippingMethod, DEFAULT_PAYMENT_DELAY};
use woods_commerce::store::STORAGE_KEY;

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["woods.toml", ".woods.toml", "woods.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart and favorites are saved.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Product catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Checkout behaviour.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, everything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the saved snapshot, relative to the working directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Snapshot key inside the directory.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".woods".to_string()
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Product JSON file. The builtin catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Checkout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated payment delay in milliseconds.
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,

    /// Shipping method used when `--shipping` is not given.
    #[serde(default)]
    pub default_shipping: ShippingMethod,
}

fn default_payment_delay_ms() -> u64 {
    DEFAULT_PAYMENT_DELAY.as_millis() as u64
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            payment_delay_ms: default_payment_delay_ms(),
            default_shipping: ShippingMethod::default(),
        }
    }
}

/// Generate a default woods.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Artisan Woods storefront configuration

[storage]
dir = "{dir}"
key = "{key}"

[catalog]
# path = "catalog.json"

[checkout]
payment_delay_ms = {delay}
default_shipping = "standard"
"#,
        dir = default_storage_dir(),
        key = STORAGE_KEY,
        delay = default_payment_delay_ms(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: CliConfig = toml::from_str("[checkout]\ndefault_shipping = \"express\"\n").unwrap();
        assert_eq!(config.checkout.default_shipping, ShippingMethod::Express);
        assert_eq!(config.checkout.payment_delay_ms, 2000);
        assert_eq!(config.storage.key, "artisan-woods-storage");
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("woods.json");

        let mut config = CliConfig::default();
        config.catalog.path = Some("products.json".to_string());
        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_unknown_shipping_is_rejected() {
        let result: Result<CliConfig, _> = toml::from_str("[checkout]\ndefault_shipping = \"drone\"\n");
        assert!(result.is_err());
    }
}
