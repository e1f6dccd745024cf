//! Home page summary.

use anyhow::Result;
use storefront_catalog::catalog::Product;

use crate::context::Context;
use crate::output::badges;

/// Run the home command.
pub async fn run(ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner("Loading catalog...");
    let home = storefront.home().await;
    spinner.finish_and_clear();
    let home = home?;

    if ctx.output.is_json() {
        ctx.output.json(&home);
        return Ok(());
    }

    ctx.output.header(&storefront.site().name);
    for slide in &home.slides {
        ctx.output.list_item(&format!("{} - {}", slide.title, slide.description));
        ctx.output.kv(&slide.cta.text, &slide.cta.link);
    }

    ctx.output.header("Shop by Category");
    for category in &home.categories {
        ctx.output.kv(&category.name, &category.count_label());
    }

    ctx.output.header("New Arrivals");
    print_cards(ctx, &home.new_arrivals);

    ctx.output.header("Featured Products");
    print_cards(ctx, &home.featured);

    Ok(())
}

fn print_cards(ctx: &Context, products: &[Product]) {
    for product in products {
        let mut line = format!("{}  {}", product.name, product.price);
        if product.is_on_sale() {
            line.push_str(&format!(" (was {})", product.original_price));
        }
        let badges = badges(product);
        if !badges.is_empty() {
            line.push_str(&format!("  [{}]", badges));
        }
        ctx.output.list_item(&line);
    }
}
