//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Options shared by every riq-* tool
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: platform config dir, or RISKIQ_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API token (overrides the config file and RISKIQ_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API private key (overrides the config file and RISKIQ_API_KEY)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Save --token/--key to the config file before running
    #[arg(long, global = true)]
    pub save: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

// ============================================================================
// riq-pdns
// ============================================================================

/// Passive DNS lookups against RiskIQ
#[derive(Parser, Debug)]
#[command(name = "riq-pdns")]
#[command(author, version, about, long_about = None)]
pub struct PdnsCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: PdnsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PdnsCommands {
    /// Records observed for a hostname
    Name {
        /// Hostname to look up
        name: String,

        #[command(flatten)]
        filter: PdnsFilter,
    },

    /// Records resolving to an IP address
    Ip {
        /// IP address to look up
        ip: String,

        #[command(flatten)]
        filter: PdnsFilter,
    },

    /// Records whose data matches a hostname
    Data {
        /// Record data to look up
        hostname: String,

        #[command(flatten)]
        filter: PdnsFilter,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PdnsFilter {
    /// Record type (A, AAAA, CNAME, MX, NS, SOA, TXT)
    #[arg(short = 't', long)]
    pub rrtype: Option<String>,

    /// Maximum number of records
    #[arg(short = 'l', long)]
    pub max_results: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

// ============================================================================
// riq-blacklist
// ============================================================================

/// Blacklist lookups and feeds from RiskIQ
#[derive(Parser, Debug)]
#[command(name = "riq-blacklist")]
#[command(author, version, about, long_about = None)]
pub struct BlacklistCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: BlacklistCommands,
}

#[derive(Subcommand, Debug)]
pub enum BlacklistCommands {
    /// Check whether URLs are blacklisted
    Lookup {
        /// URLs to check
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Incidents recorded for a URL
    Incident {
        /// URL to look up
        url: String,

        /// Index of the first incident
        #[arg(long)]
        start_index: Option<u32>,

        /// Maximum number of incidents
        #[arg(short = 'l', long)]
        max_results: Option<u32>,
    },

    /// Recently blacklisted URLs
    List {
        /// Category filter (e.g. blackhole, sakura, exploitKit)
        #[arg(short, long)]
        filter: Option<String>,

        #[command(flatten)]
        window: DaysArg,
    },

    /// URLs serving malware
    Malware {
        /// Category filter
        #[arg(short, long)]
        filter: Option<String>,

        /// Minimum confidence (H, M, L)
        #[arg(short, long)]
        confidence: Option<String>,

        #[command(flatten)]
        window: DaysArg,
    },

    /// Exploit binaries observed recently
    ExploitBinary {
        #[command(flatten)]
        window: DaysArg,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct DaysArg {
    /// Number of days back to include
    #[arg(short, long, default_value = "1")]
    pub days: u32,
}

// ============================================================================
// riq-config
// ============================================================================

/// Manage stored RiskIQ credentials and proxy settings
#[derive(Parser, Debug)]
#[command(name = "riq-config")]
#[command(author, version, about, long_about = None)]
pub struct ConfigCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the stored configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// Store the API token and private key given with --token and --key
    Setup,

    /// Set a single value (token, key, http_proxy, https_proxy)
    Set {
        /// Setting name
        field: String,

        /// New value
        value: String,
    },
}
