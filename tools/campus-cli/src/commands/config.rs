//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
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

    ctx.output.header("[engine]");
    let engine = &ctx.config.engine;
    ctx.output.kv("storage_key", &engine.storage_key);
    ctx.output.kv("currency", engine.currency.code());
    ctx.output
        .kv("default_page_size", &engine.default_page_size.to_string());
    ctx.output
        .kv("related_limit", &engine.related_limit.to_string());

    ctx.output.header("[store]");
    ctx.output.kv("data_dir", &ctx.config.store.data_dir);

    if !ctx.config.profiles.is_empty() {
        ctx.output.header("Profiles");
        let mut names: Vec<&String> = ctx.config.profiles.keys().collect();
        names.sort();
        for name in names {
            ctx.output.list_item(name);
        }
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

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

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["engine", "storage_key"] => Ok(config.engine.storage_key.clone()),
        ["engine", "currency"] => Ok(config.engine.currency.code().to_string()),
        ["engine", "default_page_size"] => Ok(config.engine.default_page_size.to_string()),
        ["engine", "related_limit"] => Ok(config.engine.related_limit.to_string()),
        ["store", "data_dir"] => Ok(config.store.data_dir.clone()),
        ["profiles", name, "storage_key"] => config
            .profiles
            .get(*name)
            .and_then(|p| p.storage_key.clone())
            .ok_or_else(|| anyhow::anyhow!("Profile {} has no storage_key", name)),
        _ => bail!("Unknown config key: {}", key),
    }
}
