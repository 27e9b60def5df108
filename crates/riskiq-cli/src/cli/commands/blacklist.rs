//! `riq-blacklist` - blacklist lookups and feeds.

use anyhow::Result;
use colored::Colorize;
use riskiq::DateRange;
use serde_json::Value;

use super::Context;
use crate::cli::args::BlacklistCommands;
use crate::output::{print_value, OutputFormat};

pub fn execute(ctx: &Context, command: BlacklistCommands) -> Result<()> {
    let client = ctx.client()?;
    let blacklist = client.blacklist();

    match command {
        BlacklistCommands::Lookup { urls } => {
            let urls: Vec<&str> = urls.iter().map(String::as_str).collect();
            let results = blacklist.lookup_bulk(&urls)?;
            print_lookups(ctx.output_format, &urls, results)
        }
        BlacklistCommands::Incident {
            url,
            start_index,
            max_results,
        } => print_value(
            ctx.output_format,
            &blacklist.incident(&url, start_index, max_results)?,
        ),
        BlacklistCommands::List { filter, window } => {
            let range = DateRange::last_days(window.days)?;
            print_value(
                ctx.output_format,
                &blacklist.list(filter.as_deref(), Some(&range))?,
            )
        }
        BlacklistCommands::Malware {
            filter,
            confidence,
            window,
        } => {
            let range = DateRange::last_days(window.days)?;
            print_value(
                ctx.output_format,
                &blacklist.malware(filter.as_deref(), confidence.as_deref(), Some(&range))?,
            )
        }
        BlacklistCommands::ExploitBinary { window } => {
            let range = DateRange::last_days(window.days)?;
            print_value(ctx.output_format, &blacklist.exploit_binary(Some(&range))?)
        }
    }
}

fn print_lookups(format: OutputFormat, urls: &[&str], results: Vec<Value>) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            for (url, result) in urls.iter().zip(&results) {
                println!("{}", url.cyan().bold());
                print_value(format, result)?;
                println!();
            }
            Ok(())
        }
        _ => print_value(format, &Value::Array(results)),
    }
}
