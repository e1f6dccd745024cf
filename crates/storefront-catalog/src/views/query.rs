//! Listing query builder.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::views::filter::{apply_filters, FilterCriteria, PriceRange};
use crate::views::sort::{sort_by, SortOption};

/// What the product listing page asks for: filters, then a sort order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingQuery {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: SortOption,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.criteria = self.criteria.with_query(q);
        self
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.criteria.price_range = range;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Filter, then sort.
    pub fn run(&self, products: &[Product]) -> Vec<Product> {
        let filtered = apply_filters(products, &self.criteria);
        sort_by(&filtered, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;
    use crate::testing::product;

    #[test]
    fn test_query_builder() {
        let query = ListingQuery::new()
            .with_query("speaker")
            .with_price_range(PriceRange::from_major(0, 100, Currency::USD))
            .with_sort(SortOption::PriceAsc);

        assert_eq!(query.sort, SortOption::PriceAsc);
        assert_eq!(query.criteria.query.as_deref(), Some("speaker"));
    }

    #[test]
    fn test_run_filters_then_sorts() {
        let products = vec![
            product("1", 90.0, "speakers", 4.3),
            product("2", 130.0, "headphones", 4.7),
            product("3", 50.0, "speakers", 4.4),
        ];
        let query = ListingQuery::new()
            .with_price_range(PriceRange::from_major(0, 100, Currency::USD))
            .with_sort(SortOption::PriceAsc);

        let ids: Vec<_> = query.run(&products).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId::new("3"), ProductId::new("1")]);
    }
}
