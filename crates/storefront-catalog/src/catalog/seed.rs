//! Demo catalog for the Boult.neu storefront.

use crate::catalog::{CatalogSnapshot, Category, HeroSlide, Product, Review, Specification};
use crate::ids::{CategoryId, ProductId};
use crate::money::{Currency, Money};

const EARBUDS_IMG: &str = "https://images.pexels.com/photos/3780681/pexels-photo-3780681.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const HEADPHONES_IMG: &str = "https://images.pexels.com/photos/3394665/pexels-photo-3394665.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const HEADPHONES_ALT_IMG: &str = "https://images.pexels.com/photos/3394666/pexels-photo-3394666.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const SPEAKER_IMG: &str = "https://images.pexels.com/photos/2651794/pexels-photo-2651794.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const ACCESSORY_IMG: &str = "https://images.pexels.com/photos/4295985/pexels-photo-4295985.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const PREMIUM_IMG: &str = "https://images.pexels.com/photos/577769/pexels-photo-577769.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
const COLLECTION_IMG: &str = "https://images.pexels.com/photos/3756766/pexels-photo-3756766.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

/// Everything the demo storefront shows.
pub fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        primary: primary_products(),
        featured: featured_products(),
        categories: categories(),
        slides: hero_slides(),
        specifications: specifications(),
        reviews: reviews(),
    }
}

struct Seed {
    id: &'static str,
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price: f64,
    original_price: f64,
    discount_percentage: u8,
    rating: f64,
    review_count: u32,
    images: [&'static str; 2],
    is_new: bool,
    stock: u32,
    category: &'static str,
}

impl Seed {
    fn build(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            slug: self.slug.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Money::from_decimal(self.price, Currency::USD),
            original_price: Money::from_decimal(self.original_price, Currency::USD),
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            review_count: self.review_count,
            images: self.images.iter().map(|s| s.to_string()).collect(),
            is_new: self.is_new,
            stock: self.stock,
            category_id: CategoryId::new(self.category),
        }
    }
}

fn primary_products() -> Vec<Product> {
    vec![
        Seed {
            id: "1",
            name: "Boult AirBass X1 Pro True Wireless Earbuds",
            slug: "boult-airbass-x1-pro",
            description: "True wireless earbuds with 32-hour battery life and deep bass.",
            price: 59.99,
            original_price: 79.99,
            discount_percentage: 25,
            rating: 4.5,
            review_count: 128,
            images: [EARBUDS_IMG, SPEAKER_IMG],
            is_new: true,
            stock: 24,
            category: "earbuds",
        }
        .build(),
        Seed {
            id: "2",
            name: "Boult ProBass Flow X Over-Ear Headphones",
            slug: "boult-probass-flow-x",
            description: "Over-ear headphones with active noise cancellation and premium sound.",
            price: 129.99,
            original_price: 149.99,
            discount_percentage: 13,
            rating: 4.7,
            review_count: 86,
            images: [HEADPHONES_IMG, HEADPHONES_ALT_IMG],
            is_new: true,
            stock: 12,
            category: "headphones",
        }
        .build(),
        Seed {
            id: "3",
            name: "Boult AudioBass Home 500 Bluetooth Speaker",
            slug: "boult-audiobass-home-500",
            description: "Powerful Bluetooth speaker with 20W output and 12-hour battery life.",
            price: 89.99,
            original_price: 89.99,
            discount_percentage: 0,
            rating: 4.3,
            review_count: 54,
            images: [SPEAKER_IMG, SPEAKER_IMG],
            is_new: false,
            stock: 18,
            category: "speakers",
        }
        .build(),
        Seed {
            id: "4",
            name: "Boult ProCharge X Fast Charging Cable",
            slug: "boult-procharge-x",
            description: "3m long USB-C to USB-C braided cable with 100W fast charging support.",
            price: 19.99,
            original_price: 24.99,
            discount_percentage: 20,
            rating: 4.8,
            review_count: 212,
            images: [ACCESSORY_IMG, ACCESSORY_IMG],
            is_new: false,
            stock: 42,
            category: "accessories",
        }
        .build(),
    ]
}

fn featured_products() -> Vec<Product> {
    vec![
        Seed {
            id: "5",
            name: "Boult AudioZen Pro Noise Cancelling Headphones",
            slug: "boult-audiozen-pro",
            description: "Premium wireless headphones with adaptive noise cancellation.",
            price: 199.99,
            original_price: 249.99,
            discount_percentage: 20,
            rating: 4.9,
            review_count: 76,
            images: [PREMIUM_IMG, PREMIUM_IMG],
            is_new: true,
            stock: 8,
            category: "headphones",
        }
        .build(),
        Seed {
            id: "6",
            name: "Boult BassX Mini Portable Bluetooth Speaker",
            slug: "boult-bassx-mini",
            description: "Ultra-portable waterproof Bluetooth speaker with punchy bass.",
            price: 49.99,
            original_price: 49.99,
            discount_percentage: 0,
            rating: 4.4,
            review_count: 102,
            images: [SPEAKER_IMG, SPEAKER_IMG],
            is_new: false,
            stock: 32,
            category: "speakers",
        }
        .build(),
        Seed {
            id: "7",
            name: "Boult ProSound X5 True Wireless Earbuds",
            slug: "boult-prosound-x5",
            description: "Premium earbuds with aptX HD support and transparency mode.",
            price: 79.99,
            original_price: 99.99,
            discount_percentage: 20,
            rating: 4.6,
            review_count: 89,
            images: [EARBUDS_IMG, EARBUDS_IMG],
            is_new: true,
            stock: 15,
            category: "earbuds",
        }
        .build(),
        Seed {
            id: "8",
            name: "Boult AudioStation 1000 Wireless Charger",
            slug: "boult-audiostation-1000",
            description: "15W fast wireless charger with headphone stand functionality.",
            price: 39.99,
            original_price: 49.99,
            discount_percentage: 20,
            rating: 4.5,
            review_count: 64,
            images: [ACCESSORY_IMG, ACCESSORY_IMG],
            is_new: false,
            stock: 28,
            category: "accessories",
        }
        .build(),
    ]
}

fn categories() -> Vec<Category> {
    vec![
        Category::new("headphones", "Headphones", HEADPHONES_IMG, 42),
        Category::new("earbuds", "Earbuds", EARBUDS_IMG, 27),
        Category::new("speakers", "Speakers", SPEAKER_IMG, 35),
        Category::new("accessories", "Accessories", ACCESSORY_IMG, 19),
    ]
}

fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide::new(
            1,
            "Experience Superior Sound",
            "Our new noise-cancelling headphones deliver unmatched audio clarity",
            HEADPHONES_IMG,
            "Shop Now",
            "/products/categories/headphones",
        ),
        HeroSlide::new(
            2,
            "Wireless Freedom",
            "True wireless earbuds with 24-hour battery life",
            EARBUDS_IMG,
            "Explore",
            "/products/categories/earbuds",
        ),
        HeroSlide::new(
            3,
            "Limited Edition Colors",
            "New season, new colors - Exclusive collection available now",
            COLLECTION_IMG,
            "View Collection",
            "/products/collections/limited-edition",
        ),
    ]
}

fn specifications() -> Vec<Specification> {
    [
        ("Driver Size", "40mm"),
        ("Frequency Response", "20Hz - 20kHz"),
        ("Impedance", "32 Ohm"),
        ("Battery Life", "Up to 30 hours"),
        ("Charging Time", "2 hours"),
        ("Bluetooth Version", "5.2"),
        ("Water Resistance", "IPX5"),
        ("Weight", "250g"),
    ]
    .into_iter()
    .map(|(name, value)| Specification::new(name, value))
    .collect()
}

fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            user: "Alex Johnson".to_string(),
            rating: 5,
            date: "2023-11-10".to_string(),
            title: "Exceptional sound quality".to_string(),
            content: "These are the best headphones I've ever owned. The sound quality is \
                      incredible and the noise cancellation works perfectly. Battery life is \
                      also impressive!"
                .to_string(),
            helpful: 24,
            not_helpful: 2,
        },
        Review {
            id: 2,
            user: "Sarah Miller".to_string(),
            rating: 4,
            date: "2023-10-28".to_string(),
            title: "Great but could be more comfortable".to_string(),
            content: "Sound quality is excellent and the battery lasts forever. My only \
                      complaint is that they get a bit uncomfortable after wearing them for \
                      several hours."
                .to_string(),
            helpful: 15,
            not_helpful: 3,
        },
        Review {
            id: 3,
            user: "Mike Chen".to_string(),
            rating: 5,
            date: "2023-10-15".to_string(),
            title: "Perfect for commuting".to_string(),
            content: "The noise cancellation is perfect for my daily commute on the subway. \
                      I can finally enjoy my music without cranking up the volume to \
                      dangerous levels."
                .to_string(),
            helpful: 18,
            not_helpful: 0,
        },
    ]
}
