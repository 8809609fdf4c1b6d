//! Quota command - resolve a credential and fetch the quota snapshot.

use anyhow::Result;
use quotabar_auth::TokenProviderChain;
use quotabar_fetch::{QuotaClient, QuotaError};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the quota command.
pub async fn run(cli: &Cli) -> Result<()> {
    let chain = TokenProviderChain::default_chain();

    let credential = match chain.resolve().await {
        Ok(credential) => credential,
        Err(e) => super::exit_with_resolution_failure(&e, cli),
    };

    info!(source = %credential.source, "Credential resolved");

    let client = QuotaClient::new();
    let quota = match client.fetch_premium_quota(&credential).await {
        Ok(quota) => quota,
        Err(QuotaError::Unauthorized) => {
            // The stored token went stale; same guidance as no credential.
            if !cli.quiet {
                eprintln!("{}", QuotaError::Unauthorized);
            }
            std::process::exit(ExitCode::NoCredential as i32);
        }
        Err(e) => return Err(e.into()),
    };

    match cli.format {
        OutputFormat::Json => {
            let json = JsonFormatter::new(cli.pretty);
            println!("{}", json.format_quota(&quota)?);
        }
        OutputFormat::Text => {
            let text = TextFormatter::new(!cli.no_color);
            print!("{}", text.format_quota(&quota, &credential.source));
        }
    }

    Ok(())
}
