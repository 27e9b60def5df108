//! riq-pdns - passive DNS lookups

use anyhow::Result;

fn main() -> Result<()> {
    riskiq_cli::cli::run_pdns()
}
