//! Read-only catalog access.

use async_trait::async_trait;

use crate::catalog::{Category, HeroSlide, Product, Review, Specification};
use crate::error::{CatalogError, CatalogResult};
use crate::ids::{CategoryId, ProductId};

/// Source of catalog records.
///
/// Page code depends on this trait rather than on a concrete store so the
/// seeded in-memory catalog can be replaced by a real backend. Every read is
/// idempotent and returns records in a stable order.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// The "new arrivals" pool, in catalog order.
    async fn list_primary(&self) -> CatalogResult<Vec<Product>>;

    /// The featured pool, in catalog order.
    async fn list_featured(&self) -> CatalogResult<Vec<Product>>;

    /// Categories promoted on the home page.
    async fn list_categories(&self) -> CatalogResult<Vec<Category>>;

    /// Slides for the home page hero carousel.
    async fn list_slides(&self) -> CatalogResult<Vec<HeroSlide>>;

    /// Rows of the product's specifications tab.
    async fn specifications(&self, id: &ProductId) -> CatalogResult<Vec<Specification>>;

    /// Customer reviews for the product, newest first.
    async fn reviews(&self, id: &ProductId) -> CatalogResult<Vec<Review>>;

    /// Primary pool followed by the featured pool.
    async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        let mut all = self.list_primary().await?;
        all.extend(self.list_featured().await?);
        Ok(all)
    }

    /// Look a product up by slug across both pools.
    ///
    /// A missing slug is `Ok(None)`, not an error.
    async fn find_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>> {
        let all = self.list_all().await?;
        Ok(all.into_iter().find(|p| p.slug == slug))
    }

    /// Like [`find_by_slug`](Self::find_by_slug), but a missing slug is
    /// [`CatalogError::ProductNotFound`].
    async fn get_by_slug(&self, slug: &str) -> CatalogResult<Product> {
        self.find_by_slug(slug)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound(slug.to_string()))
    }

    /// A missing id is [`CatalogError::CategoryNotFound`].
    async fn find_category(&self, id: &CategoryId) -> CatalogResult<Category> {
        self.list_categories()
            .await?
            .into_iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.to_string()))
    }

    /// Every slug in catalog order, for static path generation.
    async fn all_slugs(&self) -> CatalogResult<Vec<String>> {
        Ok(self.list_all().await?.into_iter().map(|p| p.slug).collect())
    }
}
