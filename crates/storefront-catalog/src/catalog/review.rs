//! Specification rows and customer reviews shown on the product detail page.

use serde::{Deserialize, Serialize};

use crate::catalog::Star;

/// One row of the specifications table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

impl Specification {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub user: String,
    /// Whole stars, 1 to 5.
    pub rating: u8,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub title: String,
    pub content: String,
    /// "Was this review helpful?" votes.
    #[serde(default)]
    pub helpful: u32,
    #[serde(default)]
    pub not_helpful: u32,
}

impl Review {
    /// Whole stars only; reviews carry no half ratings.
    pub fn stars(&self) -> [Star; 5] {
        std::array::from_fn(|i| {
            if i < usize::from(self.rating) {
                Star::Full
            } else {
                Star::Empty
            }
        })
    }
}
