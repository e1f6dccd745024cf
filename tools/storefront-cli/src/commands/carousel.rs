//! Watch the hero carousel auto-advance.

use anyhow::{bail, Context as _, Result};
use storefront_catalog::catalog::CatalogRepository;
use storefront_widgets::carousel::CarouselDriver;

use super::CarouselArgs;
use crate::context::Context;

/// Run the carousel command.
pub async fn run(args: CarouselArgs, ctx: &Context) -> Result<()> {
    let slides = ctx.catalog()?.list_slides().await?;
    if slides.is_empty() {
        bail!("The catalog has no hero slides");
    }

    let timing = ctx.config.carousel;
    let driver = CarouselDriver::spawn(slides.len(), timing)?;
    let mut index = driver.subscribe();

    ctx.output.header("Hero Carousel");
    ctx.output.info(&format!(
        "{} slides, advancing every {} ms",
        slides.len(),
        timing.interval_ms
    ));

    let mut shown = Vec::with_capacity(args.advances + 1);
    shown.push(driver.current());
    ctx.output.list_item(&slides[driver.current()].title);

    for _ in 0..args.advances {
        index
            .changed()
            .await
            .context("Carousel driver stopped unexpectedly")?;
        let current = *index.borrow_and_update();
        shown.push(current);
        ctx.output.list_item(&format!("{} ({}/{})", slides[current].title, current + 1, slides.len()));
    }

    driver.stop();

    if ctx.output.is_json() {
        ctx.output.json(&shown);
    }
    Ok(())
}
