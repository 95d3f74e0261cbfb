//! Remote version probe.
//!
//! Fetches the latest cloudflared release from the GitHub releases API and
//! extracts its tag. One bounded request, no retries.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{CheckError, Result};
use crate::version::VersionString;

/// GitHub API URL for the latest cloudflared release.
const GITHUB_API_URL: &str =
    "https://api.github.com/repos/cloudflare/cloudflared/releases/latest";

/// Hard request timeout.
const TIMEOUT: Duration = Duration::from_secs(10);

/// The slice of the release object we care about.
#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    tag_name: Option<String>,
}

/// Probes the GitHub releases API for the latest published version.
#[derive(Debug, Clone)]
pub struct RemoteVersionProbe {
    api_url: String,
    token: Option<String>,
}

impl RemoteVersionProbe {
    /// Create a probe against the GitHub API, optionally authenticated.
    ///
    /// A token raises the API rate limit; an empty or absent token sends an
    /// unauthenticated request.
    pub fn new(token: Option<String>) -> Self {
        Self {
            api_url: GITHUB_API_URL.to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Override the API URL. Used by tests to point the probe at a mock
    /// server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Fetch the latest release and extract its version tag.
    pub fn latest_version(&self) -> Result<VersionString> {
        tracing::debug!(url = %self.api_url, authenticated = self.token.is_some(), "fetching latest release");

        let client = reqwest::blocking::Client::builder()
            .user_agent("check-cloudflared")
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| CheckError::ApiRequest(e.to_string()))?;

        let mut request = client.get(&self.api_url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request
            .send()
            .map_err(|e| CheckError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(CheckError::ApiStatus(status.to_string()));
        }

        let release: Release = response
            .json()
            .map_err(|e| CheckError::ApiDecode(e.to_string()))?;

        let tag = release
            .tag_name
            .filter(|t| !t.is_empty())
            .ok_or(CheckError::TagNameMissing)?;

        Ok(VersionString::normalize(&tag))
    }
}
