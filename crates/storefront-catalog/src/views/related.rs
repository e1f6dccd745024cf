//! "You May Also Like" selection for the product detail page.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::ids::{CategoryId, ProductId};

/// Number of related products shown under a product.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Pick up to `limit` products related to a category.
///
/// Products in `category_id` come first, in catalog order. If there are fewer
/// than `limit` of them, the rest is padded with other products in catalog
/// order. `exclude_id` never appears and no id appears twice.
pub fn related_to(
    products: &[Product],
    category_id: &CategoryId,
    exclude_id: &ProductId,
    limit: usize,
) -> Vec<Product> {
    let mut selected: Vec<Product> = Vec::with_capacity(limit);
    let mut seen: HashSet<&ProductId> = HashSet::new();
    seen.insert(exclude_id);

    let same_category = products.iter().filter(|p| &p.category_id == category_id);
    for product in same_category.chain(products.iter()) {
        if selected.len() >= limit {
            break;
        }
        if seen.insert(&product.id) {
            selected.push(product.clone());
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    fn catalog() -> Vec<Product> {
        vec![
            product("1", 59.99, "earbuds", 4.5),
            product("2", 129.99, "headphones", 4.7),
            product("3", 89.99, "speakers", 4.3),
            product("4", 19.99, "accessories", 4.8),
            product("5", 199.99, "headphones", 4.9),
            product("6", 49.99, "speakers", 4.4),
            product("7", 79.99, "earbuds", 4.6),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_same_category_first_then_padding() {
        let related = related_to(
            &catalog(),
            &CategoryId::new("earbuds"),
            &ProductId::new("1"),
            DEFAULT_RELATED_LIMIT,
        );
        assert_eq!(ids(&related), vec!["7", "2", "3", "4"]);
    }

    #[test]
    fn test_excludes_current_product() {
        let related = related_to(
            &catalog(),
            &CategoryId::new("headphones"),
            &ProductId::new("5"),
            10,
        );
        assert!(related.iter().all(|p| p.id.as_str() != "5"));
        assert_eq!(related.len(), 6);
        assert_eq!(related[0].id.as_str(), "2");
    }

    #[test]
    fn test_no_duplicates() {
        let related = related_to(
            &catalog(),
            &CategoryId::new("speakers"),
            &ProductId::new("1"),
            DEFAULT_RELATED_LIMIT,
        );
        let unique: HashSet<_> = related.iter().map(|p| p.id.clone()).collect();
        assert_eq!(unique.len(), related.len());
        assert_eq!(ids(&related), vec!["3", "6", "2", "4"]);
    }

    #[test]
    fn test_limit_caps_same_category() {
        let related = related_to(
            &catalog(),
            &CategoryId::new("headphones"),
            &ProductId::new("99"),
            1,
        );
        assert_eq!(ids(&related), vec!["2"]);
    }

    #[test]
    fn test_small_catalog_is_exhausted() {
        let products = vec![product("1", 1.0, "a", 1.0), product("2", 1.0, "b", 1.0)];
        let related = related_to(&products, &CategoryId::new("a"), &ProductId::new("1"), 4);
        assert_eq!(ids(&related), vec!["2"]);
    }

    #[test]
    fn test_zero_limit() {
        let related = related_to(&catalog(), &CategoryId::new("a"), &ProductId::new("1"), 0);
        assert!(related.is_empty());
    }
}
