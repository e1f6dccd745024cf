//! Properties of the seeded catalog and the views built over it.

use std::collections::HashSet;
use std::sync::Arc;

use storefront_catalog::prelude::*;

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::seeded().unwrap()
}

#[tokio::test]
async fn test_every_slug_resolves_to_exactly_one_product() {
    let catalog = catalog();
    let all = catalog.list_all().await.unwrap();

    for product in &all {
        let found = catalog.find_by_slug(&product.slug).await.unwrap().unwrap();
        assert_eq!(found.id, product.id);
        assert_eq!(all.iter().filter(|p| p.slug == product.slug).count(), 1);
    }
}

#[tokio::test]
async fn test_absent_slugs_resolve_to_none() {
    let catalog = catalog();
    for slug in ["", "boult", "BOULT-AUDIOZEN-PRO", "boult-audiozen-pro "] {
        assert!(catalog.find_by_slug(slug).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_reads_are_order_stable() {
    let catalog = catalog();
    let first = catalog.list_all().await.unwrap();
    let second = catalog.list_all().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(catalog.all_slugs().await.unwrap().len(), 8);
}

#[tokio::test]
async fn test_related_products_hold_for_every_product() {
    let all = catalog().list_all().await.unwrap();

    for product in &all {
        let related = related_to(&all, &product.category_id, &product.id, DEFAULT_RELATED_LIMIT);

        assert!(related.len() <= DEFAULT_RELATED_LIMIT);
        assert!(related.iter().all(|p| p.id != product.id));

        let unique: HashSet<_> = related.iter().map(|p| &p.id).collect();
        assert_eq!(unique.len(), related.len());

        // Same-category items form a prefix.
        let first_padding = related
            .iter()
            .position(|p| p.category_id != product.category_id)
            .unwrap_or(related.len());
        assert!(related[first_padding..]
            .iter()
            .all(|p| p.category_id != product.category_id));
    }
}

#[tokio::test]
async fn test_filters_are_idempotent_over_seed() {
    let all = catalog().list_all().await.unwrap();
    let criteria = FilterCriteria::new(PriceRange::from_major(20, 150, Currency::USD))
        .with_categories(["Earbuds", "Speakers"])
        .with_min_rating(4.4);

    let once = apply_filters(&all, &criteria);
    let twice = apply_filters(&once, &criteria);
    assert_eq!(once, twice);

    let slugs: Vec<_> = once.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["boult-airbass-x1-pro", "boult-bassx-mini", "boult-prosound-x5"]
    );
}

#[tokio::test]
async fn test_detail_page_for_missing_slug() {
    let storefront = Storefront::new(Arc::new(catalog()));
    let detail = storefront.product_detail("does-not-exist").await.unwrap();
    assert!(matches!(detail, ProductDetail::NotFound { .. }));
    assert_eq!(
        detail.meta().description,
        "The requested product could not be found."
    );
}

#[tokio::test]
async fn test_listing_sorted_by_rating() {
    let storefront = Storefront::new(Arc::new(catalog()));
    let listing = storefront
        .listing(ListingQuery::new().with_sort(SortOption::RatingDesc))
        .await
        .unwrap();

    let ratings: Vec<f64> = listing.products.iter().map(|p| p.rating).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(listing.products[0].slug, "boult-audiozen-pro");
}
