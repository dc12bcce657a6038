//! Configuration management commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, SourceKind, StorefrontConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
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

    let catalog = &ctx.config.catalog;
    ctx.output.info("[catalog]");
    ctx.output.kv("source", &format!("{:?}", catalog.source).to_lowercase());
    if let Some(ref path) = catalog.path {
        ctx.output.kv("path", path);
    }
    if catalog.source == SourceKind::Demo {
        ctx.output.kv("demo_count", &catalog.demo_count.to_string());
        ctx.output.kv("demo_seed", &catalog.demo_seed.to_string());
    }

    ctx.output.info("[[discounts]]");
    for rule in &ctx.config.discounts {
        ctx.output.kv(&rule.code, &format!("{}%", rule.percent));
    }

    ctx.output.info("[search]");
    ctx.output
        .kv("suggestions", &ctx.config.search.suggestions.join(", "));

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv(
        "format",
        &format!("{:?}", ctx.config.logging.format).to_lowercase(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        let overwrite = !ctx.output.is_json()
            && Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()?;
        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    std::fs::write(&config_path, generate_default_config())?;
    tracing::info!(path = %config_path.display(), "wrote config");

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// Problems found in a config: (errors, warnings).
fn check_config(config: &StorefrontConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    match config.discount_book() {
        Ok(book) if book.rules().is_empty() => {
            warnings.push("no discount codes configured".to_string());
        }
        Ok(_) => {}
        Err(e) => errors.push(format!("{:#}", e)),
    }

    match config.catalog.source {
        SourceKind::File if config.catalog.path.is_none() => {
            errors.push("catalog.path is required when catalog.source = \"file\"".to_string());
        }
        SourceKind::Demo if config.catalog.demo_count == 0 => {
            warnings.push("catalog.demo_count is 0; the listing will be empty".to_string());
        }
        _ => {}
    }

    if config.search.suggestions.is_empty() {
        warnings.push("search.suggestions is empty".to_string());
    }

    (errors, warnings)
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (mut errors, warnings) = check_config(&ctx.config);
    if errors.is_empty() {
        if let Err(e) = ctx.load_catalog() {
            errors.push(format!("{:#}", e));
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
