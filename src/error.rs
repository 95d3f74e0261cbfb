//! Error types for version checks.
//!
//! Every probe failure collapses to the UNKNOWN plugin severity; the
//! variants exist so each failure site keeps its own message text, not to
//! drive distinct handling. No error is retried or recovered.

use thiserror::Error;

/// Failure raised by the local or remote version probe.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The cloudflared executable could not be run.
    #[error("cloudflared not installed")]
    NotInstalled,

    /// The version banner produced no output.
    #[error("cloudflared version output empty")]
    EmptyVersionOutput,

    /// The version banner's first line had fewer than 3 fields.
    #[error("cloudflared version output malformed")]
    MalformedVersionOutput,

    /// The GitHub API request failed at the transport level.
    #[error("Failed to fetch Github API: {0}")]
    ApiRequest(String),

    /// The GitHub API answered with a non-200 status.
    #[error("Failed to fetch Github API: {0}")]
    ApiStatus(String),

    /// The GitHub API response body was not valid JSON.
    #[error("Failed to decode Github API response: {0}")]
    ApiDecode(String),

    /// The release object carried no usable `tag_name`.
    #[error("Failed to parse Github API response: tag_name not found")]
    TagNameMissing,
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_installed_names_the_tool() {
        assert_eq!(
            CheckError::NotInstalled.to_string(),
            "cloudflared not installed"
        );
    }

    #[test]
    fn api_request_embeds_detail() {
        let err = CheckError::ApiRequest("connection refused".into());
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to fetch Github API:"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn api_status_embeds_status_text() {
        let err = CheckError::ApiStatus("404 Not Found".into());
        assert!(err.to_string().contains("404 Not Found"));
    }

    #[test]
    fn tag_name_missing_is_fixed_text() {
        assert_eq!(
            CheckError::TagNameMissing.to_string(),
            "Failed to parse Github API response: tag_name not found"
        );
    }
}
