//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use storefront_catalog::catalog::InMemoryCatalog;
use storefront_catalog::views::Storefront;
use tracing::debug;

use crate::config::{StorefrontConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };
        debug!(config = ?config_path, "configuration loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(StorefrontConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = StorefrontConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Fail if the configuration cannot drive the storefront.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.config.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let source = self
            .config_path
            .as_ref()
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        bail!(
            "Invalid configuration ({}): {}. Run `storefront config validate` for details.",
            source,
            errors.join("; ")
        );
    }

    /// The configured catalog: a JSON snapshot if one is set, the seeded demo
    /// catalog otherwise.
    pub fn catalog(&self) -> Result<InMemoryCatalog> {
        let catalog = match self.snapshot_path() {
            Some(path) => {
                let json = std::fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read catalog snapshot: {}", path.display())
                })?;
                InMemoryCatalog::from_json(&json).with_context(|| {
                    format!("Failed to load catalog snapshot: {}", path.display())
                })?
            }
            None => InMemoryCatalog::seeded().context("Failed to load the seeded catalog")?,
        };
        Ok(catalog.with_config(&self.config.catalog.store))
    }

    fn snapshot_path(&self) -> Option<PathBuf> {
        let snapshot = self.config.catalog.snapshot.as_ref()?;
        if snapshot.is_absolute() {
            return Some(snapshot.clone());
        }
        let base = self
            .config_path
            .as_ref()
            .and_then(|p| p.parent())
            .unwrap_or(self.cwd.as_path());
        Some(base.join(snapshot))
    }

    /// View builder over the seeded catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        Ok(Storefront::new(Arc::new(self.catalog()?)).with_site(self.config.site_config()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(config: StorefrontConfig, config_path: Option<&str>) -> Context {
        Context {
            config,
            config_path: config_path.map(PathBuf::from),
            output: Output::new(false, false),
            cwd: PathBuf::from("/work"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(context(StorefrontConfig::default(), None).ensure_valid().is_ok());
    }

    #[test]
    fn test_zero_interval_is_rejected_before_commands_run() {
        let mut config = StorefrontConfig::default();
        config.carousel.interval_ms = 0;
        config.carousel.cooldown_ms = 0;
        let err = context(config, Some("/work/storefront.toml"))
            .ensure_valid()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/work/storefront.toml"));
        assert!(message.contains("carousel.interval_ms must be greater than 0"));
    }

    #[test]
    fn test_snapshot_path_resolution() {
        let mut config = StorefrontConfig::default();
        assert!(context(config.clone(), None).snapshot_path().is_none());

        config.catalog.snapshot = Some(PathBuf::from("data/catalog.json"));
        assert_eq!(
            context(config.clone(), Some("/etc/shop/storefront.toml")).snapshot_path(),
            Some(PathBuf::from("/etc/shop/data/catalog.json"))
        );
        assert_eq!(
            context(config.clone(), None).snapshot_path(),
            Some(PathBuf::from("/work/data/catalog.json"))
        );

        config.catalog.snapshot = Some(PathBuf::from("/srv/catalog.json"));
        assert_eq!(
            context(config, Some("/etc/shop/storefront.toml")).snapshot_path(),
            Some(PathBuf::from("/srv/catalog.json"))
        );
    }

    #[test]
    fn test_missing_snapshot_is_an_error() {
        let mut config = StorefrontConfig::default();
        config.catalog.snapshot = Some(PathBuf::from("/nonexistent/catalog.json"));
        let err = context(config, None).catalog().unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog snapshot"));
    }
}
