//! `riq-config` - credential and proxy configuration.

use anyhow::Result;
use colored::Colorize;
use riskiq::{mask, ConfigFile, Credentials};
use serde_json::json;

use super::Context;
use crate::cli::args::ConfigCommands;
use crate::output::{print_value, OutputFormat};

pub fn execute(ctx: &Context, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Path => show_path(ctx),
        ConfigCommands::Setup => setup(ctx),
        ConfigCommands::Set { field, value } => set_config(ctx, &field, value),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = ctx.store()?.load()?;
    let masked = |secret: &Option<String>| secret.as_deref().map(mask);

    match ctx.output_format {
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();
            print_field("token", masked(&config.token));
            print_field("key", masked(&config.key));
            print_field("http_proxy", config.http_proxy.clone());
            print_field("https_proxy", config.https_proxy.clone());
        }
        format => {
            let view = json!({
                "token": masked(&config.token),
                "key": masked(&config.key),
                "http_proxy": config.http_proxy,
                "https_proxy": config.https_proxy,
            });
            print_value(format, &view)?;
        }
    }

    Ok(())
}

fn print_field(name: &str, value: Option<String>) {
    let display = value.unwrap_or_else(|| "(not set)".dimmed().to_string());
    println!("  {} {}", format!("{name}:").bold(), display);
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.store()?.path().display());
    Ok(())
}

fn setup(ctx: &Context) -> Result<()> {
    let (Some(token), Some(key)) = (ctx.token.as_deref(), ctx.key.as_deref()) else {
        anyhow::bail!("setup needs both --token <TOKEN> and --key <KEY>");
    };

    let store = ctx.store()?;
    store.persist(&Credentials::new(token, key))?;
    println!(
        "{} Credentials saved to {}.",
        "Success:".green().bold(),
        store.path().display()
    );

    Ok(())
}

fn set_config(ctx: &Context, field: &str, value: String) -> Result<()> {
    let store = ctx.store()?;
    let mut config: ConfigFile = store.load()?;

    match field {
        "token" => config.token = Some(value),
        "key" => config.key = Some(value),
        "http_proxy" => config.http_proxy = Some(value),
        "https_proxy" => config.https_proxy = Some(value),
        _ => {
            anyhow::bail!(
                "Unknown config field: {}\n\n\
                 Available fields:\n  \
                 token        - RiskIQ API token\n  \
                 key          - RiskIQ API private key\n  \
                 http_proxy   - Proxy for http:// requests\n  \
                 https_proxy  - Proxy for https:// requests",
                field
            );
        }
    }

    store.save(&config)?;
    println!("{} {} set.", "Success:".green().bold(), field.cyan());

    Ok(())
}
