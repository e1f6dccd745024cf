//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::catalog::CatalogConfig;
use storefront_catalog::money::Currency;
use storefront_catalog::views::{SiteConfig, DEFAULT_RELATED_LIMIT};
use storefront_widgets::carousel::CarouselTiming;
use storefront_widgets::filter_panel::PriceSlider;
use storefront_widgets::submit::SubmitConfig;

/// Configuration file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Site identity.
    #[serde(default)]
    pub site: SiteSection,

    /// Catalog access.
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Hero carousel timing.
    #[serde(default)]
    pub carousel: CarouselTiming,

    /// Price slider bounds.
    #[serde(default)]
    pub filters: PriceSlider,

    /// Related products.
    #[serde(default)]
    pub related: RelatedSection,

    /// Account form submission.
    #[serde(default)]
    pub submit: SubmitConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Page settings for the view builder.
    pub fn site_config(&self) -> SiteConfig {
        SiteConfig {
            name: self.site.name.clone(),
            related_limit: self.related.limit,
        }
    }

    /// Problems that make the configuration unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.site.name.trim().is_empty() {
            errors.push("site.name must not be empty".to_string());
        }
        if self.related.limit == 0 {
            errors.push("related.limit must be greater than 0".to_string());
        }
        if self.carousel.interval_ms == 0 {
            errors.push("carousel.interval_ms must be greater than 0".to_string());
        }
        if self.carousel.cooldown_ms >= self.carousel.interval_ms {
            errors.push("carousel.cooldown_ms must be shorter than carousel.interval_ms".to_string());
        }
        if self.filters.price_max <= 0 {
            errors.push("filters.price_max must be greater than 0".to_string());
        }
        if self.filters.price_step <= 0 || self.filters.price_step > self.filters.price_max {
            errors.push("filters.price_step must be between 1 and filters.price_max".to_string());
        }
        errors
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteSection {
    /// Appended to page titles.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Currency of the price filters. Products priced in another currency
    /// never pass a price filter.
    #[serde(default)]
    pub currency: Currency,
}

fn default_site_name() -> String {
    SiteConfig::default().name
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            currency: Currency::default(),
        }
    }
}

/// Catalog source and store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSection {
    /// JSON snapshot served instead of the built-in demo catalog. Relative
    /// paths resolve against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,

    #[serde(flatten)]
    pub store: CatalogConfig,
}

/// Related product settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedSection {
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for RelatedSection {
    fn default() -> Self {
        Self {
            limit: default_related_limit(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Storefront configuration

[site]
name = "{name}"
# USD, EUR, GBP, INR or JPY
currency = "USD"

[catalog]
# Simulated fetch delay; 0 disables it
latency_ms = 100
# snapshot = "catalog.json"

[carousel]
interval_ms = 6000
cooldown_ms = 500

[filters]
price_max = 500
price_step = 10

[related]
limit = 4

[submit]
latency_ms = 1000
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: StorefrontConfig = toml::from_str(&generate_default_config("Boult.neu")).unwrap();
        assert_eq!(parsed, StorefrontConfig::default());
        assert!(parsed.validate().is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: StorefrontConfig = toml::from_str("[carousel]\ninterval_ms = 3000\n").unwrap();
        assert_eq!(parsed.carousel.interval_ms, 3000);
        assert_eq!(parsed.carousel.cooldown_ms, 500);
        assert_eq!(parsed.site_config().name, "Boult.neu");
        assert_eq!(parsed.site_config().related_limit, 4);
    }

    #[test]
    fn test_validate_reports_bad_timing() {
        let mut config = StorefrontConfig::default();
        config.carousel.cooldown_ms = 9000;
        config.filters.price_step = 0;
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let parsed: StorefrontConfig =
            toml::from_str("[carousel]\ninterval_ms = 0\ncooldown_ms = 0\n").unwrap();
        let errors = parsed.validate();
        assert!(errors.contains(&"carousel.interval_ms must be greater than 0".to_string()));
    }

    #[test]
    fn test_catalog_section() {
        let parsed: StorefrontConfig = toml::from_str(
            "[site]\ncurrency = \"EUR\"\n[catalog]\nlatency_ms = 0\nsnapshot = \"eu.json\"\n",
        )
        .unwrap();
        assert_eq!(parsed.site.currency, Currency::EUR);
        assert_eq!(parsed.catalog.store.latency_ms, 0);
        assert_eq!(parsed.catalog.snapshot, Some(PathBuf::from("eu.json")));

        assert!(toml::from_str::<StorefrontConfig>("[site]\ncurrency = \"XYZ\"\n").is_err());
    }
}
