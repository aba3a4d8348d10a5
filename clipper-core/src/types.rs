//! Domain types for the clipper pipeline.
//!
//! A [`Clip`] lives only for the duration of one request; everything
//! derived from it (path, markdown) is computed fresh and never cached.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

// ---------------------------------------------------------------------------
// Clip
// ---------------------------------------------------------------------------

/// An inbound record describing a captured web passage.
///
/// `text` and `url` are required; everything else is optional metadata
/// supplied by the clipping client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    /// The captured passage. Defaults to empty when absent so the missing
    /// field is reported as a validation failure, not a parse failure.
    #[serde(default)]
    pub text: String,
    /// Address of the page the passage was clipped from.
    #[serde(default)]
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Free-text annotation appended after the passage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// ISO-8601 capture time reported by the client. Falls back to the
    /// server's receipt time when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipped_at: Option<String>,
}

impl Clip {
    /// Reject payloads missing a non-empty `text` or `url`.
    ///
    /// Runs before any remote call; a failing clip produces no side effects.
    pub fn validate(&self) -> Result<(), PayloadError> {
        if self.text.is_empty() || self.url.is_empty() {
            return Err(PayloadError::MissingTextOrUrl);
        }
        Ok(())
    }

    /// The timestamp this clip is filed under: the client-supplied
    /// `clipped_at` when non-empty, else `now` in ISO-8601 with
    /// millisecond precision and a `Z` suffix.
    pub fn effective_timestamp(&self, now: DateTime<Utc>) -> String {
        match self.clipped_at.as_deref() {
            Some(ts) if !ts.is_empty() => ts.to_string(),
            _ => now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

// ---------------------------------------------------------------------------
// RepoPath
// ---------------------------------------------------------------------------

/// A strongly-typed repository-relative path (forward slashes, no leading
/// slash), e.g. `_clips/2024-01-02-hello-world.md`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoPath(pub String);

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoPath {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl RepoPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clip(text: &str, url: &str) -> Clip {
        Clip {
            text: text.to_string(),
            url: url.to_string(),
            title: None,
            domain: None,
            note: None,
            clipped_at: None,
        }
    }

    #[test]
    fn valid_clip_passes_validation() {
        assert!(clip("passage", "https://x.com").validate().is_ok());
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(
            clip("", "https://x.com").validate(),
            Err(PayloadError::MissingTextOrUrl)
        );
    }

    #[test]
    fn empty_url_is_rejected() {
        assert_eq!(
            clip("passage", "").validate(),
            Err(PayloadError::MissingTextOrUrl)
        );
    }

    #[test]
    fn client_timestamp_wins_when_present() {
        let mut c = clip("t", "u");
        c.clipped_at = Some("2024-01-02T03:04:05Z".to_string());
        let now = Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(c.effective_timestamp(now), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn empty_client_timestamp_falls_back_to_receipt_time() {
        let mut c = clip("t", "u");
        c.clipped_at = Some(String::new());
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(c.effective_timestamp(now), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn missing_client_timestamp_falls_back_to_receipt_time() {
        let c = clip("t", "u");
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(c.effective_timestamp(now), "2024-01-02T03:04:05.000Z");
    }

    #[test]
    fn clip_serde_roundtrip_skips_absent_fields() {
        let c = clip("passage", "https://x.com");
        let json = serde_json::to_string(&c).expect("serialize");
        assert!(!json.contains("title"));
        assert!(!json.contains("clipped_at"));
        let back: Clip = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, c);
    }

    #[test]
    fn repo_path_display() {
        let path = RepoPath::from("_clips/2024-01-02-x.md");
        assert_eq!(path.to_string(), "_clips/2024-01-02-x.md");
    }
}
