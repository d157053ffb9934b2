//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

/// connpass-notify - weekly connpass event digest for Slack
#[derive(Debug, Parser)]
#[command(name = "connpass-notify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CONNPASS_NOTIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Slack incoming-webhook URL
    #[arg(long, env = "SLACK_WEBHOOK_URL")]
    pub webhook_url: Option<Url>,

    /// Series identifiers to fetch, in notification order (comma separated)
    #[arg(long, env = "CONNPASS_SERIES_IDS", value_delimiter = ',')]
    pub series_ids: Vec<String>,

    /// Seconds to pause before each upstream request
    #[arg(long)]
    pub fetch_delay_secs: Option<u64>,

    /// Print payloads instead of posting them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,
}
