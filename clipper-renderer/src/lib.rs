//! # clipper-renderer
//!
//! Deterministic transforms from a [`clipper_core::Clip`] to its committed
//! form: repository path derivation ([`slug`]) and markdown rendering with
//! YAML front matter ([`engine`]).
//!
//! Rendering is pure — the same clip and timestamp always produce
//! byte-identical output.

pub mod context;
pub mod engine;
pub mod error;
pub mod slug;

pub use context::ClipContext;
pub use engine::Renderer;
pub use error::RenderError;
pub use slug::{derive_path, slugify, COLLECTION_PREFIX};
