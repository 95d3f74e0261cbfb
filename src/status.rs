//! Plugin severities and the version comparison decision.
//!
//! Severity follows the Nagios plugin convention: a fixed four-value enum
//! mapped 1:1 to exit codes. `CRITICAL` is part of the convention but no
//! current rule produces it; it stays defined without a trigger condition.

use std::fmt;

use crate::version::VersionString;

/// Plugin severity, in Nagios exit-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Numeric exit code for this severity.
    pub fn exit_code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    /// Upper-case label used in the status line.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one check run: a severity and a human-readable message.
///
/// Created once per run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
}

impl CheckResult {
    /// The single status line emitted on stdout: `<SEVERITY> - <message>`.
    pub fn status_line(&self) -> String {
        format!("{} - {}", self.severity, self.message)
    }
}

/// Compare installed against latest and map to a severity.
///
/// Equal versions are OK, differing versions WARNING. Probe failures never
/// reach this function; UNKNOWN originates in the probes alone.
pub fn decide(installed: &VersionString, latest: &VersionString) -> CheckResult {
    let severity = if installed == latest {
        Severity::Ok
    } else {
        Severity::Warning
    };

    CheckResult {
        severity,
        message: format!(
            "Installed version: {}, Latest version: {}",
            installed, latest
        ),
    }
}
