//! Product filters for the listing page.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::money::{Currency, Money};

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a range; reversed bounds are swapped.
    pub fn new(min: Money, max: Money) -> Self {
        if min.amount_cents > max.amount_cents {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Range in whole currency units, as the price slider reports it.
    pub fn from_major(min: i64, max: i64, currency: Currency) -> Self {
        Self::new(
            Money::from_major(min, currency),
            Money::from_major(max, currency),
        )
    }

    /// A range that admits every non-negative price.
    pub fn unbounded(currency: Currency) -> Self {
        Self::new(Money::zero(currency), Money::new(i64::MAX, currency))
    }

    /// Amounts in another currency are never contained.
    pub fn contains(&self, price: &Money) -> bool {
        price.currency == self.min.currency
            && price.amount_cents >= self.min.amount_cents
            && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded(Currency::default())
    }
}

/// A single listing filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Price within inclusive bounds.
    PriceRange(PriceRange),
    /// Category matches any of the labels (OR). Empty admits everything.
    Categories(Vec<String>),
    /// Feature tags (OR). Products carry no feature data, so this admits
    /// everything.
    Features(Vec<String>),
    /// Rating at or above the threshold.
    Rating { min: f64 },
    /// Case-insensitive substring of name or description.
    Text(String),
}

impl Filter {
    /// Check a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::PriceRange(range) => range.contains(&product.price),
            Filter::Categories(labels) => {
                labels.is_empty()
                    || labels
                        .iter()
                        .any(|label| product.category_id.matches_label(label))
            }
            Filter::Features(_) => true,
            Filter::Rating { min } => product.rating >= *min,
            Filter::Text(query) => product.matches_text(query),
        }
    }
}

/// The listing page's conjunctive filter set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    /// Selected category labels; empty means any category.
    #[serde(default)]
    pub category_tags: Vec<String>,
    /// Selected feature labels; empty means any feature.
    #[serde(default)]
    pub feature_tags: Vec<String>,
    /// Minimum rating, 0 admits everything.
    #[serde(default)]
    pub min_rating: f64,
    /// Search box contents.
    #[serde(default)]
    pub query: Option<String>,
}

impl FilterCriteria {
    pub fn new(price_range: PriceRange) -> Self {
        Self {
            price_range,
            ..Default::default()
        }
    }

    pub fn with_categories<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_features<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Set the text query. Blank queries are ignored.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
        self
    }

    /// Expand into individual filters.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = vec![
            Filter::PriceRange(self.price_range),
            Filter::Categories(self.category_tags.clone()),
            Filter::Features(self.feature_tags.clone()),
            Filter::Rating {
                min: self.min_rating,
            },
        ];
        if let Some(query) = &self.query {
            filters.push(Filter::Text(query.clone()));
        }
        filters
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.filters().iter().all(|f| f.matches(product))
    }
}

/// Keep the products that pass every filter, preserving input order.
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let filters = criteria.filters();
    products
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    fn pair() -> Vec<Product> {
        vec![
            product("A", 50.0, "earbuds", 4.5),
            product("B", 130.0, "headphones", 4.7),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_range_filter() {
        let criteria = FilterCriteria::new(PriceRange::from_major(0, 100, Currency::USD));
        assert_eq!(ids(&apply_filters(&pair(), &criteria)), vec!["A"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let criteria = FilterCriteria::new(PriceRange::from_major(50, 130, Currency::USD));
        assert_eq!(ids(&apply_filters(&pair(), &criteria)), vec!["A", "B"]);
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let range = PriceRange::from_major(100, 0, Currency::USD);
        assert_eq!(range.min.amount_cents, 0);
        assert!(range.contains(&Money::from_major(100, Currency::USD)));
    }

    #[test]
    fn test_other_currency_never_matches() {
        let range = PriceRange::from_major(0, 100, Currency::EUR);
        assert!(!range.contains(&Money::from_major(50, Currency::USD)));
    }

    #[test]
    fn test_category_filter_matches_labels() {
        let criteria = FilterCriteria::default().with_categories(["Headphones"]);
        assert_eq!(ids(&apply_filters(&pair(), &criteria)), vec!["B"]);

        let criteria = FilterCriteria::default().with_categories(["Headphones", "earbuds"]);
        assert_eq!(ids(&apply_filters(&pair(), &criteria)), vec!["A", "B"]);
    }

    #[test]
    fn test_feature_filter_admits_everything() {
        let criteria = FilterCriteria::default().with_features(["Noise Cancelling"]);
        assert_eq!(apply_filters(&pair(), &criteria).len(), 2);
    }

    #[test]
    fn test_min_rating_filter() {
        let criteria = FilterCriteria::default().with_min_rating(4.6);
        assert_eq!(ids(&apply_filters(&pair(), &criteria)), vec!["B"]);
    }

    #[test]
    fn test_text_filter() {
        let criteria = FilterCriteria::default().with_query("product a");
        assert_eq!(ids(&apply_filters(&pair(), &criteria)), vec!["A"]);

        let criteria = FilterCriteria::default().with_query("   ");
        assert!(criteria.query.is_none());
    }

    #[test]
    fn test_filters_are_idempotent() {
        let criteria = FilterCriteria::new(PriceRange::from_major(0, 200, Currency::USD))
            .with_categories(["earbuds", "headphones"])
            .with_min_rating(4.6);
        let once = apply_filters(&pair(), &criteria);
        let twice = apply_filters(&once, &criteria);
        assert_eq!(once, twice);
    }
}
