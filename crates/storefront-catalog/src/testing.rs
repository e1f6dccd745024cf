//! Fixtures shared by unit tests.

use crate::catalog::Product;
use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};

pub(crate) fn product(id: &str, price: f64, category: &str, rating: f64) -> Product {
    Product {
        id: ProductId::new(id),
        slug: format!("product-{}", id),
        name: format!("Product {}", id),
        description: format!("Description of product {}", id),
        price: Money::from_decimal(price, Currency::USD),
        original_price: Money::from_decimal(price, Currency::USD),
        discount_percentage: 0,
        rating,
        review_count: 10,
        images: vec![format!("https://img.example/{}.jpg", id)],
        is_new: false,
        stock: 5,
        category_id: CategoryId::new(category),
    }
}
