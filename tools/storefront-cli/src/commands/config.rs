//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[site]");
    ctx.output.kv("name", &config.site.name);
    ctx.output.kv("currency", config.site.currency.code());

    ctx.output.info("[catalog]");
    ctx.output.kv("latency_ms", &config.catalog.store.latency_ms.to_string());
    if let Some(snapshot) = &config.catalog.snapshot {
        ctx.output.kv("snapshot", &snapshot.display().to_string());
    }

    ctx.output.info("[carousel]");
    ctx.output.kv("interval_ms", &config.carousel.interval_ms.to_string());
    ctx.output.kv("cooldown_ms", &config.carousel.cooldown_ms.to_string());

    ctx.output.info("[filters]");
    ctx.output.kv("price_max", &config.filters.price_max.to_string());
    ctx.output.kv("price_step", &config.filters.price_step.to_string());

    ctx.output.info("[related]");
    ctx.output.kv("limit", &config.related.limit.to_string());

    ctx.output.info("[submit]");
    ctx.output.kv("latency_ms", &config.submit.latency_ms.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let content = generate_default_config(&ctx.config.site.name);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.validate();
    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    bail!("Configuration has {} error(s)", errors.len());
}
