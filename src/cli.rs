//! CLI argument definitions.

use clap::Parser;

/// Check the installed cloudflared version against the latest GitHub release.
#[derive(Debug, Parser)]
#[command(name = "check_cloudflared")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Github API token for authenticated requests (raises rate limits)
    #[arg(short, long, env = "GITHUB_TOKEN")]
    pub token: Option<String>,

    /// Executable to probe instead of cloudflared (testing hook)
    #[arg(long, hide = true)]
    pub command: Option<String>,

    /// Releases API URL override (testing hook)
    #[arg(long, hide = true)]
    pub api_url: Option<String>,
}
