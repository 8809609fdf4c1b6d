// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! QuotaBar CLI - GitHub Copilot premium-request quota from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Show the current premium-request quota
//! quotabar
//!
//! # JSON output
//! quotabar --format json --pretty
//!
//! # Print the resolved token (for scripting)
//! quotabar token
//!
//! # Check which credential sources are usable
//! quotabar check
//!
//! # Refresh every 5 minutes
//! quotabar watch --interval 300
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check, quota, token, watch};

// ============================================================================
// CLI Definition
// ============================================================================

/// QuotaBar CLI - Copilot premium-request quota monitoring.
#[derive(Parser)]
#[command(name = "quotabar")]
#[command(about = "GitHub Copilot premium-request quota monitoring")]
#[command(long_about = r"
QuotaBar shows the GitHub Copilot premium-request quota for the signed-in
user, without asking for credentials of its own.

Token sources, in order:
  1. VS Code's encrypted secret store (Code - Insiders, Code, VSCodium)
  2. GitHub CLI (gh auth token)

Examples:
  quotabar                       # Current quota snapshot
  quotabar --format json         # JSON output
  quotabar token                 # Print the resolved token
  quotabar check                 # Credential source diagnostics
  quotabar watch --interval 300  # Periodic refresh
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'quota' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the current quota snapshot (default if no command specified).
    #[command(visible_alias = "q")]
    Quota,

    /// Resolve and print the GitHub token.
    #[command(visible_alias = "t")]
    Token,

    /// Check which credential sources are usable.
    Check,

    /// Refresh the quota on an interval.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// No credential could be resolved.
    NoCredential = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("quotabar=debug,info")
    } else {
        EnvFilter::new("quotabar=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Token) => token::run(&cli).await,
        Some(Commands::Check) => check::run(&cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
        Some(Commands::Quota) | None => quota::run(&cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
