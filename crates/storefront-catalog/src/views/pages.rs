//! Page view-models: what the home, listing and detail pages render.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalog::{CatalogRepository, Category, HeroSlide, Product, Review, Specification};
use crate::error::CatalogResult;
use crate::views::query::ListingQuery;
use crate::views::related::{related_to, DEFAULT_RELATED_LIMIT};

/// Page-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Appended to every page title.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Products shown under "You May Also Like".
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_site_name() -> String {
    "Boult.neu".to_string()
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            related_limit: default_related_limit(),
        }
    }
}

/// Title, description and share image for a page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PageMeta {
    fn for_product(product: &Product, site: &str) -> Self {
        Self {
            title: format!("{} | {}", product.name, site),
            description: product.description.clone(),
            image_url: product.primary_image().map(str::to_string),
        }
    }

    fn not_found(site: &str) -> Self {
        Self {
            title: format!("Product Not Found | {}", site),
            description: "The requested product could not be found.".to_string(),
            image_url: None,
        }
    }
}

/// One step of the detail page's breadcrumb trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` for the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Breadcrumb {
    fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }
}

/// Everything the home page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePage {
    pub slides: Vec<HeroSlide>,
    pub categories: Vec<Category>,
    pub new_arrivals: Vec<Product>,
    pub featured: Vec<Product>,
}

/// The filtered, sorted product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListing {
    pub query: ListingQuery,
    /// Size of the catalog before filtering.
    pub total: usize,
    pub products: Vec<Product>,
}

impl ProductListing {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Outcome of opening a product page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProductDetail {
    Found {
        product: Box<Product>,
        /// Home, category, product.
        breadcrumbs: Vec<Breadcrumb>,
        specifications: Vec<Specification>,
        reviews: Vec<Review>,
        related: Vec<Product>,
        meta: PageMeta,
    },
    NotFound {
        slug: String,
        meta: PageMeta,
    },
}

impl ProductDetail {
    pub fn meta(&self) -> &PageMeta {
        match self {
            ProductDetail::Found { meta, .. } | ProductDetail::NotFound { meta, .. } => meta,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductDetail::Found { product, .. } => Some(product.as_ref()),
            ProductDetail::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ProductDetail::Found { .. })
    }
}

/// Builds page view-models from a catalog repository.
pub struct Storefront {
    repo: Arc<dyn CatalogRepository>,
    site: SiteConfig,
}

impl Storefront {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self {
            repo,
            site: SiteConfig::default(),
        }
    }

    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn repository(&self) -> &dyn CatalogRepository {
        self.repo.as_ref()
    }

    #[instrument(skip(self))]
    pub async fn home(&self) -> CatalogResult<HomePage> {
        let (new_arrivals, featured, categories, slides) = tokio::try_join!(
            self.repo.list_primary(),
            self.repo.list_featured(),
            self.repo.list_categories(),
            self.repo.list_slides(),
        )?;
        Ok(HomePage {
            slides,
            categories,
            new_arrivals,
            featured,
        })
    }

    #[instrument(skip(self, query), fields(sort = %query.sort))]
    pub async fn listing(&self, query: ListingQuery) -> CatalogResult<ProductListing> {
        let all = self.repo.list_all().await?;
        let products = query.run(&all);
        debug!(total = all.len(), shown = products.len(), "listing built");
        Ok(ProductListing {
            query,
            total: all.len(),
            products,
        })
    }

    /// Detail page for a slug. A missing slug yields [`ProductDetail::NotFound`].
    #[instrument(skip(self))]
    pub async fn product_detail(&self, slug: &str) -> CatalogResult<ProductDetail> {
        let Some(product) = self.repo.find_by_slug(slug).await? else {
            return Ok(ProductDetail::NotFound {
                slug: slug.to_string(),
                meta: PageMeta::not_found(&self.site.name),
            });
        };

        let (all, specifications, reviews, breadcrumbs) = tokio::try_join!(
            self.repo.list_all(),
            self.repo.specifications(&product.id),
            self.repo.reviews(&product.id),
            self.breadcrumbs(&product),
        )?;
        let related = related_to(
            &all,
            &product.category_id,
            &product.id,
            self.site.related_limit,
        );
        let meta = PageMeta::for_product(&product, &self.site.name);
        Ok(ProductDetail::Found {
            product: Box::new(product),
            breadcrumbs,
            specifications,
            reviews,
            related,
            meta,
        })
    }

    /// Home, then the product's category (by name when the catalog lists it,
    /// by id otherwise), then the product itself.
    async fn breadcrumbs(&self, product: &Product) -> CatalogResult<Vec<Breadcrumb>> {
        let category_label = match self.repo.find_category(&product.category_id).await {
            Ok(category) => category.name,
            Err(e) if e.is_not_found() => product.category_id.to_string(),
            Err(e) => return Err(e),
        };
        Ok(vec![
            Breadcrumb::link("Home", "/"),
            Breadcrumb::link(category_label, product.category_id.path()),
            Breadcrumb::current(product.name.clone()),
        ])
    }

    /// Slugs of every product page.
    pub async fn static_slugs(&self) -> CatalogResult<Vec<String>> {
        self.repo.all_slugs().await
    }
}
