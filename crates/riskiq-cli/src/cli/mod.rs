//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{BlacklistCli, ConfigCli, GlobalArgs, PdnsCli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run `riq-pdns`.
pub fn run_pdns() -> Result<()> {
    let cli = PdnsCli::parse();
    let ctx = setup(cli.global);
    commands::pdns::execute(&ctx, cli.command)
}

/// Run `riq-blacklist`.
pub fn run_blacklist() -> Result<()> {
    let cli = BlacklistCli::parse();
    let ctx = setup(cli.global);
    commands::blacklist::execute(&ctx, cli.command)
}

/// Run `riq-config`.
pub fn run_config() -> Result<()> {
    let cli = ConfigCli::parse();
    let ctx = setup(cli.global);
    commands::config::execute(&ctx, cli.command)
}

fn setup(global: GlobalArgs) -> commands::Context {
    init_logging(global.verbose);

    if global.no_color {
        colored::control::set_override(false);
    }

    commands::Context::from(global)
}

/// Log to stderr: `debug` with --verbose, otherwise RUST_LOG or `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
