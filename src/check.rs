//! Check orchestration.
//!
//! Runs the two probes in sequence and folds any probe failure into an
//! UNKNOWN result. The caller (the binary) is the only place that prints
//! or exits; everything here returns values.

use crate::probes::{LocalVersionProbe, RemoteVersionProbe};
use crate::status::{decide, CheckResult, Severity};

/// Inputs for one check run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// GitHub API token for authenticated requests.
    pub token: Option<String>,
    /// Executable to probe instead of `cloudflared`.
    pub command: Option<String>,
    /// Releases API URL override.
    pub api_url: Option<String>,
}

/// Run the whole check: local probe, remote probe, decision.
///
/// Probes run strictly in order and the first failure short-circuits the
/// rest; the remote probe is never contacted when the local one fails.
pub fn run(options: &CheckOptions) -> CheckResult {
    let mut local = LocalVersionProbe::new();
    if let Some(command) = &options.command {
        local = local.with_command(command);
    }

    let installed = match local.installed_version() {
        Ok(version) => version,
        Err(e) => return CheckResult {
            severity: Severity::Unknown,
            message: e.to_string(),
        },
    };
    tracing::debug!(installed = %installed, "local probe succeeded");

    let mut remote = RemoteVersionProbe::new(options.token.clone());
    if let Some(api_url) = &options.api_url {
        remote = remote.with_api_url(api_url);
    }

    let latest = match remote.latest_version() {
        Ok(version) => version,
        Err(e) => return CheckResult {
            severity: Severity::Unknown,
            message: e.to_string(),
        },
    };
    tracing::debug!(latest = %latest, "remote probe succeeded");

    decide(&installed, &latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_failure_yields_unknown_without_touching_remote() {
        // api_url points nowhere; if the remote probe ran, the message
        // would mention the Github API instead.
        let options = CheckOptions {
            command: Some("definitely-not-a-real-binary-xyz".into()),
            api_url: Some("http://127.0.0.1:1/latest".into()),
            ..Default::default()
        };

        let result = run(&options);
        assert_eq!(result.severity, Severity::Unknown);
        assert_eq!(result.message, "cloudflared not installed");
    }

    #[test]
    #[cfg(unix)]
    fn empty_banner_yields_unknown() {
        // `test --version` exits 0 with no output (POSIX `test` treats
        // `--version` as a plain string operand), so the local probe
        // rejects the empty banner before the remote URL matters.
        let options = CheckOptions {
            command: Some("test".into()),
            api_url: Some("http://127.0.0.1:1/latest".into()),
            ..Default::default()
        };

        let result = run(&options);
        assert_eq!(result.severity, Severity::Unknown);
        assert_eq!(result.message, "cloudflared version output empty");
    }
}
