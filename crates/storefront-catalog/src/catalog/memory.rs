//! In-memory catalog backed by fixed product lists.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{
    seed, CatalogRepository, Category, HeroSlide, Product, Review, Specification,
};
use crate::error::{CatalogError, CatalogResult};
use crate::ids::ProductId;

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Simulated fetch latency in milliseconds. Zero disables the delay.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    100
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl CatalogConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Serialized form accepted by [`InMemoryCatalog::from_json`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub primary: Vec<Product>,
    #[serde(default)]
    pub featured: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub slides: Vec<HeroSlide>,
    /// Specification sheet shown on every product page.
    #[serde(default)]
    pub specifications: Vec<Specification>,
    /// Reviews shown on every product page.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Read-only catalog held in memory.
///
/// Records are validated once at construction; reads clone the stored
/// snapshot so callers never share mutable state with the store.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    primary: Vec<Product>,
    featured: Vec<Product>,
    categories: Vec<Category>,
    slides: Vec<HeroSlide>,
    specifications: Vec<Specification>,
    reviews: Vec<Review>,
    latency: Duration,
}

impl InMemoryCatalog {
    /// Build a catalog from a snapshot, rejecting invalid or duplicate records.
    pub fn new(snapshot: CatalogSnapshot) -> CatalogResult<Self> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for product in snapshot.primary.iter().chain(snapshot.featured.iter()) {
            product.validate()?;
            if !ids.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.to_string()));
            }
            if !slugs.insert(product.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
        }

        Ok(Self {
            primary: snapshot.primary,
            featured: snapshot.featured,
            categories: snapshot.categories,
            slides: snapshot.slides,
            specifications: snapshot.specifications,
            reviews: snapshot.reviews,
            latency: Duration::ZERO,
        })
    }

    /// The Boult.neu demo catalog.
    pub fn seeded() -> CatalogResult<Self> {
        Self::new(seed::snapshot())
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        Self::new(snapshot)
    }

    /// Apply settings from configuration.
    pub fn with_config(self, config: &CatalogConfig) -> Self {
        self.with_latency(config.latency())
    }

    /// Delay every read by `latency`, mimicking a remote fetch.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.featured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_product(&self, id: &ProductId) -> CatalogResult<()> {
        if self.primary.iter().chain(self.featured.iter()).any(|p| &p.id == id) {
            Ok(())
        } else {
            Err(CatalogError::ProductNotFound(id.to_string()))
        }
    }

    async fn simulate_fetch(&self, what: &'static str) {
        debug!(what, latency_ms = self.latency.as_millis() as u64, "catalog fetch");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_primary(&self) -> CatalogResult<Vec<Product>> {
        self.simulate_fetch("primary").await;
        Ok(self.primary.clone())
    }

    async fn list_featured(&self) -> CatalogResult<Vec<Product>> {
        self.simulate_fetch("featured").await;
        Ok(self.featured.clone())
    }

    async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn list_slides(&self) -> CatalogResult<Vec<HeroSlide>> {
        Ok(self.slides.clone())
    }

    async fn specifications(&self, id: &ProductId) -> CatalogResult<Vec<Specification>> {
        self.ensure_product(id)?;
        Ok(self.specifications.clone())
    }

    async fn reviews(&self, id: &ProductId) -> CatalogResult<Vec<Review>> {
        self.ensure_product(id)?;
        Ok(self.reviews.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>> {
        let found = self.list_all().await?.into_iter().find(|p| p.slug == slug);
        if found.is_none() {
            debug!(slug, "no product for slug");
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;
    use crate::testing::product;

    fn snapshot(primary: Vec<Product>, featured: Vec<Product>) -> CatalogSnapshot {
        CatalogSnapshot {
            primary,
            featured,
            ..Default::default()
        }
    }

    #[test]
    fn test_rejects_duplicate_slug() {
        let a = product("1", 10.0, "earbuds", 4.0);
        let mut b = product("2", 10.0, "earbuds", 4.0);
        b.slug = a.slug.clone();
        let err = InMemoryCatalog::new(snapshot(vec![a], vec![b])).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSlug("product-1".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_id_across_pools() {
        let a = product("1", 10.0, "earbuds", 4.0);
        let mut b = product("1", 10.0, "earbuds", 4.0);
        b.slug = "other".to_string();
        let err = InMemoryCatalog::new(snapshot(vec![a], vec![b])).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("1".to_string()));
    }

    #[test]
    fn test_rejects_invalid_record() {
        let mut a = product("1", 10.0, "earbuds", 4.0);
        a.rating = 7.0;
        assert!(InMemoryCatalog::new(snapshot(vec![a], vec![])).is_err());
    }

    #[tokio::test]
    async fn test_find_by_slug_searches_both_pools() {
        let catalog = InMemoryCatalog::new(snapshot(
            vec![product("1", 10.0, "earbuds", 4.0)],
            vec![product("2", 20.0, "speakers", 4.0)],
        ))
        .unwrap();

        let found = catalog.find_by_slug("product-2").await.unwrap().unwrap();
        assert_eq!(found.id.as_str(), "2");
        assert!(catalog.find_by_slug("missing").await.unwrap().is_none());

        let err = catalog.get_by_slug("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_category() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let speakers = catalog
            .find_category(&CategoryId::new("speakers"))
            .await
            .unwrap();
        assert_eq!(speakers.name, "Speakers");
        assert_eq!(speakers.path(), "/products/categories/speakers");

        let err = catalog
            .find_category(&CategoryId::new("turntables"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err, CatalogError::CategoryNotFound("turntables".to_string()));
    }

    #[tokio::test]
    async fn test_specifications_and_reviews() {
        let catalog = InMemoryCatalog::seeded().unwrap();
        let id = ProductId::new("2");

        let specs = catalog.specifications(&id).await.unwrap();
        assert_eq!(specs.len(), 8);
        assert_eq!(specs[0], Specification::new("Driver Size", "40mm"));

        let reviews = catalog.reviews(&id).await.unwrap();
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].user, "Alex Johnson");
        assert_eq!(reviews[2].not_helpful, 0);

        let err = catalog.reviews(&ProductId::new("99")).await.unwrap_err();
        assert_eq!(err, CatalogError::ProductNotFound("99".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let catalog = InMemoryCatalog::seeded()
            .unwrap()
            .with_latency(Duration::from_millis(100));
        let start = tokio::time::Instant::now();
        catalog.list_primary().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::to_string(&snapshot(
            vec![product("1", 10.0, "earbuds", 4.0)],
            vec![],
        ))
        .unwrap();
        let catalog = InMemoryCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 1);

        assert!(matches!(
            InMemoryCatalog::from_json("{not json"),
            Err(CatalogError::Backend(_))
        ));
    }
}
