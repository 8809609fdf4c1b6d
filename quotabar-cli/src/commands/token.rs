//! Token command - resolve and print the GitHub token.

use anyhow::Result;
use quotabar_auth::TokenProviderChain;

use crate::{Cli, OutputFormat};

/// Runs the token command.
///
/// The token goes to stdout so it can be piped; the origin label goes to
/// stderr where it won't pollute captures.
pub async fn run(cli: &Cli) -> Result<()> {
    let chain = TokenProviderChain::default_chain();

    let credential = match chain.resolve().await {
        Ok(credential) => credential,
        Err(e) => super::exit_with_resolution_failure(&e, cli),
    };

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "token": credential.token,
                "source": credential.source,
            });
            if cli.pretty {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{value}");
            }
        }
        OutputFormat::Text => {
            println!("{}", credential.token);
            if !cli.quiet {
                eprintln!("source: {}", credential.source);
            }
        }
    }

    Ok(())
}
