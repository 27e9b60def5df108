//! riq-blacklist - blacklist lookups and feeds

use anyhow::Result;

fn main() -> Result<()> {
    riskiq_cli::cli::run_blacklist()
}
