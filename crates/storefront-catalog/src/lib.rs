//! Catalog data access and derived product views for the Boult.neu storefront.
//!
//! This crate provides the read side of the storefront:
//!
//! - **Catalog**: Products, categories, hero slides, reviews and the repository trait
//! - **Views**: Filters, sort orders, related products and page view-models
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_catalog::prelude::*;
//!
//! let catalog = InMemoryCatalog::seeded()?;
//! let storefront = Storefront::new(Arc::new(catalog));
//!
//! let listing = storefront
//!     .listing(
//!         ListingQuery::new()
//!             .with_price_range(PriceRange::from_major(0, 100, Currency::USD))
//!             .with_sort(SortOption::PriceAsc),
//!     )
//!     .await?;
//!
//! for product in &listing.products {
//!     println!("{} {}", product.name, product.price);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod views;

#[cfg(test)]
mod testing;

pub use error::{CatalogError, CatalogResult};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Badge, CallToAction, CatalogConfig, CatalogRepository, CatalogSnapshot, Category,
        HeroSlide, InMemoryCatalog, Product, Review, Specification, Star, StockStatus,
    };

    // Views
    pub use crate::views::{
        apply_filters, related_to, sort_by, Breadcrumb, Filter, FilterCriteria, HomePage, ListingQuery,
        PageMeta, PriceRange, ProductDetail, ProductListing, SiteConfig, SortOption, Storefront,
        DEFAULT_RELATED_LIMIT,
    };
}
