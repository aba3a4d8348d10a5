//! # clipper-github
//!
//! Commit reconciliation against a git host's contents API.
//!
//! The host offers no atomic upsert, so [`Reconciler::commit`] approximates
//! a compare-and-swap: read the object's current version token (blob SHA),
//! then issue one conditional create-or-update carrying that token. A
//! concurrent writer between the two steps makes the host reject the write;
//! that rejection is surfaced, never retried.

pub mod contents;
pub mod error;
pub mod reconciler;

pub use contents::{CommitReceipt, ContentsWrite, GithubContents, RemoteContents, RemoteFileState};
pub use error::GithubError;
pub use reconciler::Reconciler;
