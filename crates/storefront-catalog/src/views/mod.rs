//! Views module.
//!
//! Pure projections over catalog records (filters, sort orders, related
//! products) and the page view-models built from them.

mod filter;
mod pages;
mod query;
mod related;
mod sort;

pub use filter::{apply_filters, Filter, FilterCriteria, PriceRange};
pub use pages::{
    Breadcrumb, HomePage, PageMeta, ProductDetail, ProductListing, SiteConfig, Storefront,
};
pub use query::ListingQuery;
pub use related::{related_to, DEFAULT_RELATED_LIMIT};
pub use sort::{sort_by, SortOption};
