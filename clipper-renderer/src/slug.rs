//! Slug and repository-path derivation.
//!
//! Deterministic by construction: repeated clips of the same logical item
//! derive the same path and therefore collide into the same file, which is
//! what turns a duplicate clip into an update instead of a new document.

use clipper_core::types::{Clip, RepoPath};

/// Directory prefix all committed clips live under.
pub const COLLECTION_PREFIX: &str = "_clips";

/// Slug source when a clip carries neither title nor domain.
pub const FALLBACK_SLUG: &str = "clip";

/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 60;

/// Normalise `source` into a filename-safe token.
///
/// Lowercases, collapses every maximal run of characters outside
/// `[a-z0-9]` into a single hyphen, strips edge hyphens, and truncates to
/// [`SLUG_MAX_LEN`]. The truncation cut can land on a hyphen, so the
/// trailing edge is stripped again afterwards.
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut pending_hyphen = false;

    for ch in source.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    // Slug is ASCII-only at this point; byte truncation is char-safe.
    slug.truncate(SLUG_MAX_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Derive the repository path a clip is filed under:
/// `_clips/<date>-<slug>.md`, where `date` is the first ten characters of
/// the effective timestamp and the slug source is title, else domain, else
/// [`FALLBACK_SLUG`].
pub fn derive_path(clip: &Clip, timestamp: &str) -> RepoPath {
    let date: String = timestamp.chars().take(10).collect();
    let source = clip
        .title
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| clip.domain.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or(FALLBACK_SLUG);
    RepoPath(format!("{COLLECTION_PREFIX}/{date}-{}.md", slugify(source)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
