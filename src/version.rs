//! Version string normalization.
//!
//! Release tags and version banners disagree on whether the version carries
//! a `v` prefix (`v2024.1.0` vs `2024.1.0`). [`VersionString`] normalizes
//! that away so the two sides compare by plain string equality. No semver
//! parsing happens anywhere; versions are opaque tokens.

use std::fmt;

/// A version identifier with any leading `v` prefix removed.
///
/// Compared only by exact string equality, never numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    /// Normalize a raw version token, stripping a single leading `v`.
    ///
    /// Normalization is idempotent: a token without a leading `v` passes
    /// through unchanged.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.strip_prefix('v').unwrap_or(raw).to_string())
    }

    /// The normalized version text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_v() {
        assert_eq!(VersionString::normalize("v2024.1.0").as_str(), "2024.1.0");
    }

    #[test]
    fn leaves_bare_version_alone() {
        assert_eq!(VersionString::normalize("2024.1.0").as_str(), "2024.1.0");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = VersionString::normalize("v2024.1.0");
        let twice = VersionString::normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn strips_only_one_v() {
        // "vv1" is a malformed tag, but normalization must not loop
        assert_eq!(VersionString::normalize("vv1.0").as_str(), "v1.0");
    }

    #[test]
    fn empty_string_stays_empty() {
        assert_eq!(VersionString::normalize("").as_str(), "");
    }

    #[test]
    fn equality_is_plain_string_equality() {
        // No numeric interpretation: 1.0 and 1.00 are different versions
        assert_ne!(
            VersionString::normalize("1.0"),
            VersionString::normalize("1.00")
        );
        assert_eq!(
            VersionString::normalize("v1.0"),
            VersionString::normalize("1.0")
        );
    }

    #[test]
    fn displays_normalized_text() {
        assert_eq!(VersionString::normalize("v1.2.3").to_string(), "1.2.3");
    }
}
