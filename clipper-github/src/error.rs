//! Error types for clipper-github.

use thiserror::Error;

/// All errors that can arise from contents-API operations.
///
/// A failing existence check is an error in its own right — only an
/// explicit 404 counts as "absent". Conflating other read failures with
/// absence would risk a blind create over unseen content.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The existence check failed with something other than not-found.
    #[error("contents read for {path} failed with status {status}: {body}")]
    ReadRejected {
        path: String,
        status: u16,
        body: String,
    },

    /// The create-or-update call was rejected by the host. Carries the
    /// status and raw body verbatim; a stale version token typically
    /// surfaces here as a 409.
    #[error("contents write for {path} failed with status {status}: {body}")]
    WriteRejected {
        path: String,
        status: u16,
        body: String,
    },

    /// Transport-level failure (DNS, TLS, connect, read).
    #[error("transport error for {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// A 2xx response whose body did not decode as the expected shape.
    #[error("unexpected response body for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
