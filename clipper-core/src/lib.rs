//! Clipper core library — clip payload types, validation, configuration.
//!
//! Public API surface:
//! - [`types`] — [`Clip`], [`RepoPath`], payload validation
//! - [`config`] — immutable process [`Config`] loaded once at startup
//! - [`error`] — [`ConfigError`], [`PayloadError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, DEFAULT_BIND, DEFAULT_BRANCH};
pub use error::{ConfigError, PayloadError};
pub use types::{Clip, RepoPath};
