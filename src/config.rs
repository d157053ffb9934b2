//! Runtime configuration.
//!
//! Settings come from an optional TOML file plus CLI/environment overrides
//! (`SLACK_WEBHOOK_URL`, `CONNPASS_SERIES_IDS`). Everything is resolved and
//! validated once at startup, before the first network call; core logic only
//! ever sees the validated [`Config`] value passed in by parameter.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::cli::Cli;
use crate::connpass;
use crate::error::{Error, Result};

/// File-level settings, all optional; CLI/environment values win.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    webhook_url: Option<Url>,
    series_ids: Vec<String>,
    api_base_url: Option<Url>,
    fetch_delay_secs: Option<u64>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Validated settings for one notification run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slack incoming-webhook destination.
    pub webhook_url: Url,
    /// Series identifiers to fetch, in notification order.
    pub series_ids: Vec<String>,
    /// Event listing API base URL.
    pub api_base_url: Url,
    /// Pause inserted before each upstream request.
    pub fetch_delay: Duration,
    /// Print payloads instead of posting them.
    pub dry_run: bool,
}

impl Config {
    /// Merges the config file (if any) with CLI/environment overrides and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the file cannot be read or parsed, the webhook
    /// URL is missing, or the series list is empty or contains a blank id.
    pub fn resolve(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let webhook_url = cli.webhook_url.or(file.webhook_url).ok_or_else(|| {
            Error::config("webhook_url is not set (--webhook-url or SLACK_WEBHOOK_URL)")
        })?;

        let series_ids = if cli.series_ids.is_empty() {
            file.series_ids
        } else {
            cli.series_ids
        };
        let series_ids: Vec<String> = series_ids
            .iter()
            .map(|id| id.trim().to_string())
            .collect();
        if series_ids.is_empty() {
            return Err(Error::config(
                "series_ids is empty (--series-ids or CONNPASS_SERIES_IDS)",
            ));
        }
        if series_ids.iter().any(|id| id.is_empty()) {
            return Err(Error::config("series_ids contains a blank id"));
        }

        let api_base_url = file
            .api_base_url
            .unwrap_or_else(|| connpass::API_BASE_URL.parse().expect("valid base URL"));

        let fetch_delay = Duration::from_secs(
            cli.fetch_delay_secs
                .or(file.fetch_delay_secs)
                .unwrap_or(connpass::DEFAULT_FETCH_DELAY.as_secs()),
        );

        Ok(Self {
            webhook_url,
            series_ids,
            api_base_url,
            fetch_delay,
            dry_run: cli.dry_run,
        })
    }
}
