//! Product detail page.

use anyhow::Result;
use storefront_catalog::views::ProductDetail;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{badges, stars, stock_label};

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;

    let spinner = ctx.output.spinner(&format!("Loading {}...", args.slug));
    let detail = storefront.product_detail(&args.slug).await;
    spinner.finish_and_clear();
    let detail = detail?;

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    match detail {
        ProductDetail::NotFound { slug, meta } => {
            ctx.output.header(&meta.title);
            ctx.output.warn(&meta.description);
            ctx.output.kv("slug", &slug);
            ctx.output.info("Run `storefront slugs` to list available products.");
        }
        ProductDetail::Found {
            product,
            breadcrumbs,
            specifications,
            reviews,
            related,
            meta,
        } => {
            ctx.output.header(&meta.title);
            let trail: Vec<&str> = breadcrumbs.iter().map(|b| b.label.as_str()).collect();
            ctx.output.info(&trail.join(" / "));
            ctx.output.kv("name", &product.name);
            ctx.output.kv(
                "rating",
                &format!(
                    "{} {:.1} ({} reviews)",
                    stars(&product.rating_stars()),
                    product.rating,
                    product.review_count
                ),
            );
            ctx.output.kv("price", &product.price.display());
            if product.is_on_sale() {
                ctx.output.kv("was", &product.original_price.display());
                if let Ok(savings) = product.savings() {
                    ctx.output.kv("you save", &savings.display());
                }
            }
            let badges = badges(&product);
            if !badges.is_empty() {
                ctx.output.kv("badges", &badges);
            }
            ctx.output.kv("availability", &stock_label(product.stock_status()));
            ctx.output.kv("max quantity", &product.max_purchase_quantity().to_string());
            ctx.output.kv("category", product.category_id.as_str());
            if let Some(image) = product.primary_image() {
                ctx.output.kv("image", image);
            }
            ctx.output.info(&product.description);

            if !specifications.is_empty() {
                ctx.output.header("Specifications");
                for spec in &specifications {
                    ctx.output.table_row(&[spec.name.as_str(), spec.value.as_str()], &[20, 24]);
                }
            }

            ctx.output.header(&product.reviews_tab_label());
            for review in &reviews {
                ctx.output.list_item(&format!(
                    "{} {} by {} ({})",
                    stars(&review.stars()),
                    review.title,
                    review.user,
                    review.date
                ));
                ctx.output.info(&review.content);
                ctx.output.kv(
                    "helpful",
                    &format!("{} yes / {} no", review.helpful, review.not_helpful),
                );
            }

            ctx.output.header("You May Also Like");
            ctx.output.product_table(&related);
        }
    }

    Ok(())
}
