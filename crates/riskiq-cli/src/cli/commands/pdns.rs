//! `riq-pdns` - passive DNS lookups.

use anyhow::Result;
use riskiq::api::PdnsQuery;
use std::time::Duration;

use super::Context;
use crate::cli::args::{PdnsCommands, PdnsFilter};
use crate::output::print_value;

pub fn execute(ctx: &Context, command: PdnsCommands) -> Result<()> {
    let client = ctx.client()?;
    let pdns = client.pdns();

    let result = match command {
        PdnsCommands::Name { name, filter } => pdns.name(&name, &query(&filter))?,
        PdnsCommands::Ip { ip, filter } => pdns.ip(&ip, &query(&filter))?,
        PdnsCommands::Data { hostname, filter } => pdns.data(&hostname, &query(&filter))?,
    };

    print_value(ctx.output_format, &result)
}

fn query(filter: &PdnsFilter) -> PdnsQuery {
    PdnsQuery {
        rrtype: filter.rrtype.clone(),
        max_results: filter.max_results,
        timeout: filter.timeout.map(Duration::from_secs),
    }
}
