//! Category types for product organization.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A shoppable category shown on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier, shared with `Product::category_id`.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Tile image URL.
    pub image_url: String,
    /// Advertised number of products in this category.
    pub product_count: u32,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        product_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            product_count,
        }
    }

    /// Listing path for this category.
    pub fn path(&self) -> String {
        self.id.path()
    }

    /// Count line shown under the tile title.
    pub fn count_label(&self) -> String {
        format!("{} products", self.product_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_path() {
        let cat = Category::new("speakers", "Speakers", "https://img.example/s.jpg", 35);
        assert_eq!(cat.path(), "/products/categories/speakers");
        assert_eq!(cat.count_label(), "35 products");
    }
}
