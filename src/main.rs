//! connpass-notify entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use connpass_notify::cli::Cli;
use connpass_notify::config::Config;
use connpass_notify::error::Result;
use connpass_notify::{ConnpassClient, Dispatcher, NotifyWindow, aggregate, slack};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli)?;

    let window = NotifyWindow::current();
    info!(from = %window.from(), to = %window.to(), "computed notification window");

    let client =
        ConnpassClient::with_base_url(config.api_base_url.clone()).with_fetch_delay(config.fetch_delay);

    let merged = aggregate(&client, &config.series_ids, &window).await?;
    if merged.is_empty() {
        info!("no upcoming events in the window; nothing to send");
        return Ok(());
    }

    let payloads: Vec<_> = merged.iter().map(slack::format).collect();

    if config.dry_run {
        for payload in &payloads {
            let rendered = serde_json::to_string_pretty(payload).expect("payload serializes");
            println!("{rendered}");
        }
        return Ok(());
    }

    let dispatcher = Dispatcher::new(config.webhook_url.clone());
    dispatcher.send_all(&payloads).await
}
