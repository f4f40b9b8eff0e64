//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[storage]");
    ctx.output.kv("dir", &ctx.config.storage.dir);
    ctx.output.kv("key", &ctx.config.storage.key);

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(builtin)"),
    );

    ctx.output.info("[checkout]");
    ctx.output.kv(
        "payment_delay_ms",
        &ctx.config.checkout.payment_delay_ms.to_string(),
    );
    ctx.output
        .kv("default_shipping", ctx.config.checkout.default_shipping.id());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}
