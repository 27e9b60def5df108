//! riq-config - manage stored RiskIQ credentials

use anyhow::Result;

fn main() -> Result<()> {
    riskiq_cli::cli::run_config()
}
