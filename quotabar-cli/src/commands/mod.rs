//! CLI command implementations.

pub mod check;
pub mod quota;
pub mod token;
pub mod watch;

use quotabar_core::AuthError;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Renders a resolution failure and exits with the no-credential code.
///
/// The aggregate error keeps per-provider attribution, so the text
/// rendering can tell "not installed" apart from "not signed in".
pub(crate) fn exit_with_resolution_failure(err: &AuthError, cli: &Cli) -> ! {
    match cli.format {
        OutputFormat::Json => {
            let json = JsonFormatter::new(cli.pretty);
            println!("{}", json.format_resolution_failure(err));
        }
        OutputFormat::Text => {
            let text = TextFormatter::new(!cli.no_color);
            eprint!("{}", text.format_resolution_failure(err));
        }
    }

    std::process::exit(ExitCode::NoCredential as i32);
}
