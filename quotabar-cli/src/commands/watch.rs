//! Watch command - refresh the quota snapshot on an interval.

use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use quotabar_auth::TokenProviderChain;
use quotabar_core::PremiumQuota;
use quotabar_fetch::QuotaClient;
use tracing::debug;

use crate::output::TextFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds.
    #[arg(long, short, default_value = "300")]
    pub interval: u64,
}

/// Runs the watch command.
///
/// Each tick is an independent resolve-and-fetch; nothing is cached
/// between ticks, so signing in (or out) shows up on the next refresh.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<()> {
    let interval = Duration::from_secs(args.interval.max(1));
    let chain = TokenProviderChain::default_chain();
    let client = QuotaClient::new();
    let text = TextFormatter::new(!cli.no_color);

    loop {
        let timestamp = Local::now().format("%H:%M:%S");

        match refresh(&chain, &client).await {
            Ok(quota) => match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&quota)?),
                OutputFormat::Text => {
                    println!("[{timestamp}] {}", TextFormatter::quota_line(&quota));
                }
            },
            Err(message) => match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "error": message }));
                }
                OutputFormat::Text => {
                    println!("[{timestamp}] {}", text.fail_marker(&message));
                }
            },
        }

        debug!(interval = ?interval, "Sleeping until next refresh");
        tokio::time::sleep(interval).await;
    }
}

/// One resolve-and-fetch cycle.
async fn refresh(chain: &TokenProviderChain, client: &QuotaClient) -> Result<PremiumQuota, String> {
    let credential = chain.resolve().await.map_err(|e| e.to_string())?;
    client
        .fetch_premium_quota(&credential)
        .await
        .map_err(|e| e.to_string())
}
