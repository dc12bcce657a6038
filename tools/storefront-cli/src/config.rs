//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::{DiscountBook, DiscountRule};
use storefront_commerce::catalog::{CatalogSource, DemoCatalog, JsonFileCatalog, StaticCatalog};
use storefront_commerce::search::DEFAULT_SUGGESTIONS;

use crate::logging::LoggingConfig;

/// Config file names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Where products come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Recognized discount codes.
    #[serde(default = "default_discounts")]
    pub discounts: Vec<DiscountRule>,

    /// Header search box.
    #[serde(default)]
    pub search: SearchConfig,

    /// Log filter and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_discounts() -> Vec<DiscountRule> {
    vec![DiscountRule::default()]
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            discounts: default_discounts(),
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Parse config text as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        let config = if json {
            serde_json::from_str(content)?
        } else {
            toml::from_str(content)?
        };
        Ok(config)
    }

    /// Validated discount book.
    pub fn discount_book(&self) -> Result<DiscountBook> {
        DiscountBook::new(self.discounts.clone()).context("Invalid [[discounts]] section")
    }
}

/// Which catalog source to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Bundled fixture.
    #[default]
    Static,
    /// JSON file at `catalog.path`.
    File,
    /// Generated placeholder products.
    Demo,
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceKind,

    /// Fixture path for `source = "file"`, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Number of generated products for `source = "demo"`.
    #[serde(default = "default_demo_count")]
    pub demo_count: usize,

    /// Seed for `source = "demo"`.
    #[serde(default = "default_demo_seed")]
    pub demo_seed: u64,
}

fn default_demo_count() -> usize {
    10
}

fn default_demo_seed() -> u64 {
    42
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Static,
            path: None,
            demo_count: default_demo_count(),
            demo_seed: default_demo_seed(),
        }
    }
}

impl CatalogConfig {
    /// Build the configured source. Relative paths resolve against `cwd`.
    pub fn source(&self, cwd: &Path) -> Result<Box<dyn CatalogSource>> {
        match self.source {
            SourceKind::Static => Ok(Box::new(StaticCatalog)),
            SourceKind::Demo => Ok(Box::new(DemoCatalog::new(self.demo_count, self.demo_seed))),
            SourceKind::File => {
                let path = self
                    .path
                    .as_deref()
                    .context("catalog.path is required when catalog.source = \"file\"")?;
                Ok(Box::new(JsonFileCatalog::new(cwd.join(path))))
            }
        }
    }
}

/// Search box configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_suggestions")]
    pub suggestions: Vec<String>,
}

fn default_suggestions() -> Vec<String> {
    DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestions: default_suggestions(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# static | file | demo
source = "static"
# path = "products.json"
demo_count = 10
demo_seed = 42

[[discounts]]
code = "DISCOUNT10"
percent = 10

[search]
suggestions = ["Home", "Shop", "Wallets", "Offers", "About Us"]

[logging]
# Overridden by RUST_LOG
level = "info"
# human | json
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StorefrontConfig::parse("", false).unwrap();
        assert_eq!(config.catalog.source, SourceKind::Static);
        assert_eq!(config.discounts, vec![DiscountRule::default()]);
        assert_eq!(config.search.suggestions.len(), 5);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = StorefrontConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config.catalog.demo_seed, 42);
        let book = config.discount_book().unwrap();
        assert_eq!(book.lookup("DISCOUNT10").unwrap().percent, Decimal::TEN);
    }

    #[test]
    fn test_custom_discounts_replace_default() {
        let config = StorefrontConfig::parse(
            r#"
            [[discounts]]
            code = "SPRING15"
            percent = 15
            "#,
            false,
        )
        .unwrap();
        let book = config.discount_book().unwrap();
        assert!(book.lookup("DISCOUNT10").is_none());
        assert_eq!(book.lookup("SPRING15").unwrap().percent, Decimal::new(15, 0));
    }

    #[test]
    fn test_invalid_discount_rejected() {
        let config = StorefrontConfig::parse(
            r#"{"discounts": [{"code": "HUGE", "percent": 150}]}"#,
            true,
        )
        .unwrap();
        assert!(config.discount_book().is_err());
    }

    #[test]
    fn test_file_source_requires_path() {
        let config = StorefrontConfig::parse("[catalog]\nsource = \"file\"\n", false).unwrap();
        assert!(config.catalog.source(Path::new(".")).is_err());
    }

    #[test]
    fn test_demo_source() {
        let config =
            StorefrontConfig::parse("[catalog]\nsource = \"demo\"\ndemo_count = 3\n", false)
                .unwrap();
        let catalog = config.catalog.source(Path::new(".")).unwrap().load().unwrap();
        assert_eq!(catalog.len(), 3);
    }
}
