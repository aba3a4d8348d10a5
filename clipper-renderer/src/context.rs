//! Render context — serializable payload built from a [`Clip`].

use serde::{Deserialize, Serialize};

use clipper_core::types::Clip;

use crate::error::RenderError;

/// Flat rendering payload for the clip document template.
///
/// Optional clip fields are normalised here so the template stays dumb:
/// `source_title`/`source_domain` become empty strings when absent, and
/// `attribution` resolves the title → domain → url preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipContext {
    /// Full effective timestamp, verbatim.
    pub date: String,
    pub source_url: String,
    pub source_title: String,
    pub source_domain: String,
    /// The captured passage, unescaped.
    pub passage: String,
    /// Optional free-text note; empty or absent notes are skipped.
    pub note: Option<String>,
    /// Link label for the trailing attribution line.
    pub attribution: String,
}

impl ClipContext {
    /// Build a [`ClipContext`] from a clip and its effective timestamp.
    pub fn new(clip: &Clip, timestamp: &str) -> Self {
        let title = clip.title.as_deref().filter(|s| !s.is_empty());
        let domain = clip.domain.as_deref().filter(|s| !s.is_empty());
        let attribution = title.or(domain).unwrap_or(clip.url.as_str()).to_string();

        ClipContext {
            date: timestamp.to_string(),
            source_url: clip.url.clone(),
            source_title: clip.title.clone().unwrap_or_default(),
            source_domain: clip.domain.clone().unwrap_or_default(),
            passage: clip.text.clone(),
            note: clip.note.clone(),
            attribution,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> Clip {
        Clip {
            text: "line1\nline2".to_string(),
            url: "https://x.com".to_string(),
            title: Some("T".to_string()),
            domain: Some("x.com".to_string()),
            note: None,
            clipped_at: None,
        }
    }

    #[test]
    fn attribution_prefers_title() {
        let ctx = ClipContext::new(&clip(), "2024-01-02T03:04:05Z");
        assert_eq!(ctx.attribution, "T");
    }

    #[test]
    fn attribution_falls_back_to_domain_then_url() {
        let mut c = clip();
        c.title = None;
        assert_eq!(
            ClipContext::new(&c, "ts").attribution,
            "x.com",
            "domain should win when title is absent"
        );

        c.domain = Some(String::new());
        assert_eq!(ClipContext::new(&c, "ts").attribution, "https://x.com");
    }

    #[test]
    fn absent_optionals_become_empty_strings() {
        let mut c = clip();
        c.title = None;
        c.domain = None;
        let ctx = ClipContext::new(&c, "ts");
        assert_eq!(ctx.source_title, "");
        assert_eq!(ctx.source_domain, "");
    }

    #[test]
    fn to_tera_context_succeeds() {
        let ctx = ClipContext::new(&clip(), "2024-01-02T03:04:05Z");
        ctx.to_tera_context().expect("context conversion");
    }
}
