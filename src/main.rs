//! check_cloudflared plugin entry point.

use std::process::ExitCode;

use check_cloudflared::check::{self, CheckOptions};
use check_cloudflared::cli::Cli;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by `RUST_LOG` (default INFO for this crate).
/// Logs go to stderr so the status line stays alone on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("check_cloudflared=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("check_cloudflared starting with args: {:?}", cli);

    let options = CheckOptions {
        token: cli.token,
        command: cli.command,
        api_url: cli.api_url,
    };

    let result = check::run(&options);
    println!("{}", result.status_line());
    ExitCode::from(result.severity.exit_code())
}
