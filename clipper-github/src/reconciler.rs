//! Commit reconciliation — read the version token, write once with it.
//!
//! ## `commit` — the reconciliation protocol
//!
//! 1. Snapshot the object at `path` (absent, or present with token).
//! 2. Base64-encode the document and build the commit message.
//! 3. Issue one create-or-update; an existing object's token rides along
//!    so the host rejects the write if the object changed since step 1.
//! 4. Surface the receipt, or the rejection verbatim. No retry.
//!
//! Steps 1 and 3 are not transactional: a concurrent writer landing
//! between them loses nothing — the host's token check turns this commit
//! into a terminal failure the caller must re-submit.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use clipper_core::types::RepoPath;

use crate::contents::{CommitReceipt, ContentsWrite, RemoteContents, RemoteFileState};
use crate::error::GithubError;

/// Performs the read-then-conditional-write sequence against a
/// [`RemoteContents`] host.
#[derive(Clone)]
pub struct Reconciler {
    host: Arc<dyn RemoteContents + Send + Sync>,
}

impl Reconciler {
    pub fn new(host: Arc<dyn RemoteContents + Send + Sync>) -> Self {
        Reconciler { host }
    }

    /// Commit `document` at `path`, creating or updating as the remote
    /// state dictates.
    ///
    /// `subject` feeds the commit message (`clip: <subject>`); the path
    /// stands in when it is absent or empty.
    pub fn commit(
        &self,
        path: &RepoPath,
        document: &str,
        subject: Option<&str>,
    ) -> Result<CommitReceipt, GithubError> {
        let sha = match self.host.read(path.as_str())? {
            RemoteFileState::Present { sha } => {
                tracing::debug!(path = %path, sha = %sha, "path exists, updating");
                Some(sha)
            }
            RemoteFileState::Absent => {
                tracing::debug!(path = %path, "path absent, creating");
                None
            }
        };

        let subject = subject.filter(|s| !s.is_empty()).unwrap_or(path.as_str());
        let write = ContentsWrite {
            message: format!("clip: {subject}"),
            content: BASE64.encode(document.as_bytes()),
            sha,
        };

        let receipt = self.host.write(path.as_str(), &write)?;
        tracing::info!(path = %path, sha = ?receipt.sha, "clip committed");
        Ok(receipt)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
