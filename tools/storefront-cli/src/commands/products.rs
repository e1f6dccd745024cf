//! Product listing with filters and sorting.

use anyhow::{bail, Context as _, Result};
use storefront_catalog::money::{Currency, Money};
use storefront_catalog::views::{FilterCriteria, ListingQuery, PriceRange};
use storefront_widgets::filter_panel::{FilterGroup, FilterPanel};

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let criteria = build_criteria(&args, ctx)?;
    let query = ListingQuery::new().with_criteria(criteria).with_sort(args.sort);
    ctx.output.debug(&format!("sort: {}, criteria: {:?}", query.sort, query.criteria));

    let storefront = ctx.storefront()?;
    let spinner = ctx.output.spinner("Loading products...");
    let listing = storefront.listing(query).await;
    spinner.finish_and_clear();
    let listing = listing?;

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {}, {})",
        listing.products.len(),
        listing.total,
        listing.query.sort.display_name()
    ));

    if listing.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    ctx.output.product_table(&listing.products);
    Ok(())
}

/// Tags go through the filter panel so they get the same label handling as
/// the sidebar. Explicit price flags are not capped by the slider.
fn build_criteria(args: &ProductsArgs, ctx: &Context) -> Result<FilterCriteria> {
    let currency = ctx.config.site.currency;
    let mut panel = FilterPanel::new(ctx.config.filters, currency);

    for tag in args.categories.iter().chain(args.features.iter()) {
        if FilterGroup::of(tag).is_none() {
            ctx.output.warn(&format!("Unknown filter option '{}', ignored", tag));
            continue;
        }
        panel.toggle(tag);
    }

    if let Some(stars) = args.rating {
        if !(1..=4).contains(&stars) {
            bail!("--rating must be between 1 and 4");
        }
        panel.toggle(&format!("{}★ & above", stars));
    }

    let unbounded = PriceRange::unbounded(currency);
    let min = price_bound("--min-price", args.min_price, currency)?.unwrap_or(unbounded.min);
    let max = price_bound("--max-price", args.max_price, currency)?.unwrap_or(unbounded.max);

    let mut criteria = panel.to_criteria();
    criteria.price_range = PriceRange::new(min, max);
    if let Some(q) = &args.query {
        criteria = criteria.with_query(q.as_str());
    }
    Ok(criteria)
}

fn price_bound(flag: &str, units: Option<i64>, currency: Currency) -> Result<Option<Money>> {
    units
        .map(|units| {
            Money::try_from_major(units, currency)
                .with_context(|| format!("{} {} is out of range", flag, units))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::output::Output;
    use storefront_catalog::views::SortOption;

    fn context() -> Context {
        Context {
            config: StorefrontConfig::default(),
            config_path: None,
            output: Output::new(false, false),
            cwd: PathBuf::from("."),
        }
    }

    fn args() -> ProductsArgs {
        ProductsArgs {
            sort: SortOption::Featured,
            min_price: None,
            max_price: None,
            categories: Vec::new(),
            features: Vec::new(),
            rating: None,
            query: None,
        }
    }

    #[test]
    fn test_omitted_price_flags_are_unbounded() {
        let criteria = build_criteria(&args(), &context()).unwrap();
        assert_eq!(criteria.price_range, PriceRange::unbounded(Currency::USD));
    }

    #[test]
    fn test_price_flags_are_not_capped_by_slider() {
        let mut args = args();
        args.min_price = Some(20);
        args.max_price = Some(900);
        let criteria = build_criteria(&args, &context()).unwrap();
        assert_eq!(criteria.price_range, PriceRange::from_major(20, 900, Currency::USD));
    }

    #[test]
    fn test_huge_max_price_is_an_error() {
        let mut args = args();
        args.max_price = Some(100_000_000_000_000_000);
        let err = build_criteria(&args, &context()).unwrap_err();
        assert!(err
            .to_string()
            .contains("--max-price 100000000000000000 is out of range"));
    }

    #[test]
    fn test_tags_and_rating() {
        let mut args = args();
        args.categories = vec!["Earbuds".to_string(), "Vinyl".to_string()];
        args.rating = Some(4);
        let criteria = build_criteria(&args, &context()).unwrap();
        assert_eq!(criteria.category_tags, vec!["Earbuds"]);
        assert_eq!(criteria.min_rating, 4.0);

        args.rating = Some(5);
        assert!(build_criteria(&args, &context()).is_err());
    }

    #[test]
    fn test_configured_currency() {
        let mut ctx = context();
        ctx.config.site.currency = Currency::EUR;
        let mut args = args();
        args.max_price = Some(100);
        let criteria = build_criteria(&args, &ctx).unwrap();
        assert_eq!(criteria.price_range.max, Money::from_major(100, Currency::EUR));
    }
}
