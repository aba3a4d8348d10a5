//! Remote contents abstraction and the GitHub implementation.
//!
//! [`RemoteContents`] is the seam the reconciler works through: a snapshot
//! read returning a typed [`RemoteFileState`], and a single conditional
//! write. [`GithubContents`] implements it over the REST contents API:
//!
//! - read:  `GET /repos/<repo>/contents/<path>?ref=<branch>`
//! - write: `PUT /repos/<repo>/contents/<path>` with
//!   `{message, content, branch, sha?}`

use serde::{Deserialize, Serialize};

use clipper_core::Config;

use crate::error::GithubError;

const GITHUB_API: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("clipper/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Trait and exchange types
// ---------------------------------------------------------------------------

/// Snapshot of the remote object at a path on the configured branch.
///
/// Read once per commit; the `Present` token is the optimistic-concurrency
/// witness attached to the subsequent write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFileState {
    /// No object at this path.
    Absent,
    /// Object exists; `sha` is its current version token.
    Present { sha: String },
}

/// One create-or-update request.
///
/// `content` is the base64-encoded document. `sha` carries the version
/// token recorded during the read, or `None` for a create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsWrite {
    pub message: String,
    pub content: String,
    pub sha: Option<String>,
}

/// Receipt for an accepted write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReceipt {
    /// New version token of the committed object.
    pub sha: Option<String>,
    /// Host-supplied display URL for the committed file.
    pub html_url: Option<String>,
}

/// A content store addressed by repository-relative path, scoped to one
/// repository and branch.
pub trait RemoteContents {
    /// Snapshot the object at `path`. Only an explicit not-found maps to
    /// [`RemoteFileState::Absent`]; every other failure is an error.
    fn read(&self, path: &str) -> Result<RemoteFileState, GithubError>;

    /// Create or update the object at `path`. The host rejects the write
    /// when `req.sha` no longer matches the live object.
    fn write(&self, path: &str, req: &ContentsWrite) -> Result<CommitReceipt, GithubError>;
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct ContentsMeta {
    sha: String,
    html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PutContentsResponse {
    content: Option<ContentsMeta>,
}

#[derive(Debug, Serialize)]
struct PutContentsBody<'a> {
    message: &'a str,
    content: &'a str,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// GithubContents
// ---------------------------------------------------------------------------

/// Blocking contents-API client for one repository + branch.
pub struct GithubContents {
    agent: ureq::Agent,
    base_url: String,
    repo: String,
    branch: String,
    token: String,
}

impl GithubContents {
    /// Client for the configured repository and branch against the public
    /// GitHub API.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config, GITHUB_API)
    }

    /// Client against an alternate API root (GitHub Enterprise, local
    /// test server).
    pub fn with_base_url(config: &Config, base_url: &str) -> Self {
        GithubContents {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            repo: config.repo.clone(),
            branch: config.branch.clone(),
            token: config.github_token.clone(),
        }
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{}/repos/{}/contents/{}", self.base_url, self.repo, path)
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }
}

impl RemoteContents for GithubContents {
    fn read(&self, path: &str) -> Result<RemoteFileState, GithubError> {
        let url = format!("{}?ref={}", self.contents_url(path), self.branch);
        let result = self
            .agent
            .get(&url)
            .set("Authorization", &self.auth_header())
            .set("User-Agent", USER_AGENT)
            .call();

        match result {
            Ok(resp) => {
                let meta: ContentsMeta = resp.into_json().map_err(|e| GithubError::Decode {
                    path: path.to_string(),
                    source: e,
                })?;
                Ok(RemoteFileState::Present { sha: meta.sha })
            }
            Err(ureq::Error::Status(404, _)) => Ok(RemoteFileState::Absent),
            Err(ureq::Error::Status(status, resp)) => Err(GithubError::ReadRejected {
                path: path.to_string(),
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(err) => Err(GithubError::Transport {
                path: path.to_string(),
                source: Box::new(err),
            }),
        }
    }

    fn write(&self, path: &str, req: &ContentsWrite) -> Result<CommitReceipt, GithubError> {
        let url = self.contents_url(path);
        let body = PutContentsBody {
            message: &req.message,
            content: &req.content,
            branch: &self.branch,
            sha: req.sha.as_deref(),
        };

        let result = self
            .agent
            .put(&url)
            .set("Authorization", &self.auth_header())
            .set("User-Agent", USER_AGENT)
            .send_json(body);

        match result {
            Ok(resp) => {
                let decoded: PutContentsResponse =
                    resp.into_json().map_err(|e| GithubError::Decode {
                        path: path.to_string(),
                        source: e,
                    })?;
                let (sha, html_url) = match decoded.content {
                    Some(meta) => (Some(meta.sha), meta.html_url),
                    None => (None, None),
                };
                Ok(CommitReceipt { sha, html_url })
            }
            Err(ureq::Error::Status(status, resp)) => Err(GithubError::WriteRejected {
                path: path.to_string(),
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(err) => Err(GithubError::Transport {
                path: path.to_string(),
                source: Box::new(err),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            auth_token: "shared".to_string(),
            github_token: "ghp_test".to_string(),
            repo: "alice/site".to_string(),
            branch: "main".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }

    #[test]
    fn contents_url_shape() {
        let client = GithubContents::new(&config());
        assert_eq!(
            client.contents_url("_clips/2024-01-02-t.md"),
            "https://api.github.com/repos/alice/site/contents/_clips/2024-01-02-t.md"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GithubContents::with_base_url(&config(), "http://127.0.0.1:9999/");
        assert_eq!(
            client.contents_url("a.md"),
            "http://127.0.0.1:9999/repos/alice/site/contents/a.md"
        );
    }

    #[test]
    fn put_body_omits_sha_on_create() {
        let body = PutContentsBody {
            message: "clip: t",
            content: "aGk=",
            branch: "main",
            sha: None,
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert!(json.get("sha").is_none(), "create must not send a sha key");
        assert_eq!(json["branch"], "main");
    }

    #[test]
    fn put_body_carries_sha_on_update() {
        let body = PutContentsBody {
            message: "clip: t",
            content: "aGk=",
            branch: "main",
            sha: Some("abc123"),
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["sha"], "abc123");
    }

    #[test]
    fn put_response_with_null_content_decodes() {
        let decoded: PutContentsResponse =
            serde_json::from_str(r#"{"content": null}"#).expect("decode");
        assert!(decoded.content.is_none());
    }
}
