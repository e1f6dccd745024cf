//! Product record and display helpers.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;

/// A product in the catalog.
///
/// Records are immutable snapshots; nothing in the storefront mutates them
/// after the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identity within the catalog.
    pub id: ProductId,
    /// URL-friendly slug (unique), the lookup key for detail views.
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Price before any discount. Never below `price`.
    pub original_price: Money,
    /// Discount as authored by merchandising (0-100).
    pub discount_percentage: u8,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    pub review_count: u32,
    /// Image URLs; the first one is the primary image.
    pub images: Vec<String>,
    pub is_new: bool,
    /// Units available. Zero means unavailable.
    pub stock: u32,
    pub category_id: CategoryId,
}

/// Badge shown over a product image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    New,
    Discount(u8),
}

impl Badge {
    pub fn label(&self) -> String {
        match self {
            Badge::New => "New".to_string(),
            Badge::Discount(pct) => format!("-{}%", pct),
        }
    }
}

/// Availability as shown on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In stock",
            StockStatus::OutOfStock => "Out of stock",
        }
    }
}

/// One of the five rating stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Product {
    /// Check the record against catalog invariants.
    pub fn validate(&self) -> CatalogResult<()> {
        let id = self.id.as_str();
        if id.is_empty() {
            return Err(CatalogError::invalid(id, "id is empty"));
        }
        if self.slug.trim().is_empty() {
            return Err(CatalogError::invalid(id, "slug is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid(id, "name is empty"));
        }
        if self.description.trim().is_empty() {
            return Err(CatalogError::invalid(id, "description is empty"));
        }
        if self.images.is_empty() {
            return Err(CatalogError::invalid(id, "product has no images"));
        }
        if self.price.is_negative() {
            return Err(CatalogError::invalid(id, "price is negative"));
        }
        if self.price.try_cmp(&self.original_price)?.is_gt() {
            return Err(CatalogError::invalid(id, "price exceeds original price"));
        }
        if self.discount_percentage > 100 {
            return Err(CatalogError::invalid(id, "discount above 100%"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogError::invalid(id, "rating outside 0-5"));
        }
        Ok(())
    }

    /// Check if the product is sold below its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.amount_cents > self.price.amount_cents
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> CatalogResult<Money> {
        self.original_price.try_subtract(&self.price)
    }

    /// Discount derived from the two prices, rounded to the nearest percent.
    pub fn computed_discount_percentage(&self) -> u8 {
        let original = self.original_price.amount_cents;
        if original <= 0 || !self.is_on_sale() {
            return 0;
        }
        let saved = original - self.price.amount_cents;
        ((saved as f64 / original as f64) * 100.0).round() as u8
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Alternate image shown on hover, if the product has one.
    pub fn hover_image(&self) -> Option<&str> {
        self.images.get(1).map(String::as_str)
    }

    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::new();
        if self.is_new {
            badges.push(Badge::New);
        }
        if self.discount_percentage > 0 {
            badges.push(Badge::Discount(self.discount_percentage));
        }
        badges
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.is_available() {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Largest quantity the quantity picker allows.
    pub fn max_purchase_quantity(&self) -> u32 {
        self.stock
    }

    /// Five stars: full below the floor of the rating, half for a fractional
    /// remainder, empty after that.
    pub fn rating_stars(&self) -> [Star; 5] {
        let floor = self.rating.floor();
        std::array::from_fn(|i| {
            let i = i as f64;
            if i < floor {
                Star::Full
            } else if i < self.rating {
                Star::Half
            } else {
                Star::Empty
            }
        })
    }

    /// Title of the detail page's reviews tab.
    pub fn reviews_tab_label(&self) -> String {
        format!("Reviews ({})", self.review_count)
    }

    pub fn matches_text(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
