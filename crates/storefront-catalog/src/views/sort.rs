//! Listing sort orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CatalogError;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order, unchanged.
    #[default]
    Featured,
    /// Newest first. Records carry no timestamp, so catalog position is the
    /// proxy: later entries are newer.
    Newest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::Newest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
    ];

    /// Key used in query strings (`?sort=price-asc`).
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::Newest => "newest",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::RatingDesc => "rating-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::Newest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::RatingDesc => "Highest Rated",
        }
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.key() == key)
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Return the products in the requested order.
///
/// Sorting is stable: products that compare equal keep their input order.
pub fn sort_by(products: &[Product], key: SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortOption::Featured => {}
        SortOption::Newest => sorted.reverse(),
        SortOption::PriceAsc => sorted.sort_by_key(|p| p.price.amount_cents),
        SortOption::PriceDesc => {
            sorted.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents))
        }
        SortOption::RatingDesc => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn pair() -> Vec<Product> {
        vec![
            product("A", 50.0, "earbuds", 4.5),
            product("B", 130.0, "headphones", 4.7),
        ]
    }

    #[test]
    fn test_price_sorts() {
        assert_eq!(ids(&sort_by(&pair(), SortOption::PriceAsc)), vec!["A", "B"]);
        assert_eq!(ids(&sort_by(&pair(), SortOption::PriceDesc)), vec!["B", "A"]);
    }

    #[test]
    fn test_newest_reverses_catalog_order() {
        let products = vec![
            product("1", 10.0, "a", 1.0),
            product("2", 10.0, "a", 1.0),
            product("3", 10.0, "a", 1.0),
        ];
        assert_eq!(ids(&sort_by(&products, SortOption::Newest)), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let products = vec![
            product("1", 10.0, "a", 4.5),
            product("2", 10.0, "a", 4.9),
            product("3", 10.0, "a", 4.5),
        ];
        assert_eq!(
            ids(&sort_by(&products, SortOption::RatingDesc)),
            vec!["2", "1", "3"]
        );
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = vec![
            product("1", 20.0, "a", 1.0),
            product("2", 10.0, "a", 1.0),
            product("3", 20.0, "a", 1.0),
        ];
        assert_eq!(
            ids(&sort_by(&products, SortOption::PriceDesc)),
            vec!["1", "3", "2"]
        );
    }

    #[test]
    fn test_featured_keeps_order() {
        assert_eq!(ids(&sort_by(&pair(), SortOption::Featured)), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("price-asc".parse::<SortOption>().unwrap(), SortOption::PriceAsc);
        assert_eq!("Newest".parse::<SortOption>().unwrap(), SortOption::Newest);
        assert_eq!(
            "cheapest".parse::<SortOption>().unwrap_err(),
            CatalogError::UnknownSortKey("cheapest".to_string())
        );
        for opt in SortOption::ALL {
            assert_eq!(opt.key().parse::<SortOption>().unwrap(), opt);
        }
    }
}
