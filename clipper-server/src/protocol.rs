//! JSON envelope for gateway responses.

use serde::{Deserialize, Serialize};

use clipper_github::CommitReceipt;

/// Success body for an accepted clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipAccepted {
    pub ok: bool,
    /// Repository path the clip was committed to.
    pub file: String,
    /// New version token of the committed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Host-supplied display URL for the committed file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ClipAccepted {
    pub fn new(file: impl Into<String>, receipt: CommitReceipt) -> Self {
        ClipAccepted {
            ok: true,
            file: file.into(),
            sha: receipt.sha,
            url: receipt.html_url,
        }
    }
}

/// Error body shared by every rejection, regardless of status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_body_omits_absent_fields() {
        let body = ClipAccepted::new(
            "_clips/2024-01-02-t.md",
            CommitReceipt {
                sha: None,
                html_url: None,
            },
        );
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(json, r#"{"ok":true,"file":"_clips/2024-01-02-t.md"}"#);
    }

    #[test]
    fn accepted_body_carries_receipt_fields() {
        let body = ClipAccepted::new(
            "_clips/a.md",
            CommitReceipt {
                sha: Some("abc".to_string()),
                html_url: Some("https://github.com/x".to_string()),
            },
        );
        let json: serde_json::Value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["sha"], "abc");
        assert_eq!(json["url"], "https://github.com/x");
    }
}
