//! check-cloudflared - Nagios-compatible cloudflared version check.
//!
//! Compares the locally installed cloudflared version against the latest
//! release published on GitHub and reports a single status line with a
//! conventional plugin exit code (OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3).
//!
//! # Modules
//!
//! - [`check`] - Probe orchestration and result folding
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result alias
//! - [`probes`] - Local executable and GitHub release probes
//! - [`status`] - Severities, decision logic, and the status line
//! - [`version`] - Version string normalization
//!
//! # Example
//!
//! ```
//! use check_cloudflared::status::{decide, Severity};
//! use check_cloudflared::version::VersionString;
//!
//! let installed = VersionString::normalize("2024.1.0");
//! let latest = VersionString::normalize("v2024.1.0");
//! let result = decide(&installed, &latest);
//! assert_eq!(result.severity, Severity::Ok);
//! ```

pub mod check;
pub mod cli;
pub mod error;
pub mod probes;
pub mod status;
pub mod version;

pub use error::{CheckError, Result};
