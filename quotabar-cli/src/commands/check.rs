//! Check command - per-provider credential source diagnostics.

use anyhow::Result;
use quotabar_auth::{GhCliTokenProvider, VsCodeTokenProvider};
use quotabar_core::TokenProvider;

use crate::output::TextFormatter;
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the check command.
///
/// Unlike `quota`, every provider is tried even after a success, so the
/// report shows the state of each source.
pub async fn run(cli: &Cli) -> Result<()> {
    let providers: Vec<Box<dyn TokenProvider>> = vec![
        Box::new(VsCodeTokenProvider::new()),
        Box::new(GhCliTokenProvider::new()),
    ];

    let mut any_ok = false;

    for provider in &providers {
        let outcome = provider.fetch_token().await;
        any_ok |= outcome.is_ok();

        match cli.format {
            OutputFormat::Json => {
                let value = match &outcome {
                    Ok(credential) => serde_json::json!({
                        "provider": provider.name(),
                        "available": true,
                        "source": credential.source,
                    }),
                    Err(e) => serde_json::json!({
                        "provider": provider.name(),
                        "available": false,
                        "error": e.to_string(),
                    }),
                };
                println!("{value}");
            }
            OutputFormat::Text => {
                let text = TextFormatter::new(!cli.no_color);
                match &outcome {
                    Ok(credential) => {
                        println!(
                            "{:<18} {}",
                            provider.name(),
                            text.ok_marker(&format!("token via {}", credential.source))
                        );
                    }
                    Err(e) => {
                        println!("{:<18} {}", provider.name(), text.fail_marker(&e.to_string()));
                    }
                }
            }
        }
    }

    if !any_ok {
        std::process::exit(ExitCode::NoCredential as i32);
    }

    Ok(())
}
