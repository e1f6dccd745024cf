//! Static product paths.

use anyhow::Result;

use crate::context::Context;

/// Run the slugs command.
pub async fn run(ctx: &Context) -> Result<()> {
    let slugs = ctx.storefront()?.static_slugs().await?;

    if ctx.output.is_json() {
        ctx.output.json(&slugs);
        return Ok(());
    }

    for slug in &slugs {
        println!("/products/{}", slug);
    }
    Ok(())
}
