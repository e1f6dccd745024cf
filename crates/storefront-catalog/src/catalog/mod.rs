//! Product catalog module.
//!
//! Contains the product, category, slide and review records, the repository
//! trait page code reads through, and the seeded in-memory store.

mod category;
mod memory;
mod product;
mod repository;
mod review;
mod seed;
mod slide;

pub use category::Category;
pub use memory::{CatalogConfig, CatalogSnapshot, InMemoryCatalog};
pub use product::{Badge, Product, Star, StockStatus};
pub use repository::CatalogRepository;
pub use review::{Review, Specification};
pub use slide::{CallToAction, HeroSlide};
