//! # clipper-server
//!
//! The request gateway: a single-endpoint axum service that validates
//! method, bearer credential, and payload shape, then drives the
//! render-and-commit pipeline and maps the outcome onto a JSON envelope.
//! Every response carries permissive cross-origin headers so the
//! browser-based clipping client can call it from arbitrary pages.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod runtime;

pub use error::ServerError;
pub use gateway::{router, AppState};
pub use runtime::{run, serve, start_blocking};
