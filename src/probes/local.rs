//! Local version probe.
//!
//! Runs `cloudflared --version` and extracts the version token from the
//! banner. The banner layout is a fixed contract with cloudflared:
//! `cloudflared version X.Y.Z (built ...)` — name, the literal `version`,
//! then the version number. Fewer than 3 fields means the contract broke.

use std::process::Command;

use crate::error::{CheckError, Result};
use crate::version::VersionString;

/// Default executable name, resolved on PATH.
const DEFAULT_COMMAND: &str = "cloudflared";

/// Probes the locally installed cloudflared for its version.
///
/// The child process is waited on synchronously with no timeout; only the
/// remote call is bounded. That asymmetry matches the original plugin
/// behavior.
#[derive(Debug, Clone)]
pub struct LocalVersionProbe {
    command: String,
}

impl LocalVersionProbe {
    pub fn new() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
        }
    }

    /// Override the probed executable. Used by tests to point the probe at
    /// a stub binary.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Run the executable and extract the installed version.
    pub fn installed_version(&self) -> Result<VersionString> {
        tracing::debug!(command = %self.command, "probing installed version");

        let output = Command::new(&self.command)
            .arg("--version")
            .output()
            .map_err(|_| CheckError::NotInstalled)?;

        if !output.status.success() {
            return Err(CheckError::NotInstalled);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_version_banner(&stdout)
    }
}

impl Default for LocalVersionProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the version token from the banner's first line.
fn parse_version_banner(stdout: &str) -> Result<VersionString> {
    let first_line = stdout.lines().next().ok_or(CheckError::EmptyVersionOutput)?;

    let fields: Vec<&str> = first_line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(CheckError::MalformedVersionOutput);
    }

    Ok(VersionString::normalize(fields[2]))
}
