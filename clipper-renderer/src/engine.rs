//! Tera rendering engine for the clip document.
//!
//! One embedded template (`clip.md.tera`) baked into the binary via
//! `include_str!`, plus two custom filters:
//!
//! - `blockquote` — prefixes the first line with `> ` and rewrites every
//!   interior newline as `\n> `, so multi-line passages stay one quote.
//! - `yaml_escape` — escapes double quotes for the front-matter title.
//!   Nothing else in the document is escaped.

use std::collections::HashMap;

use tera::{Tera, Value};

use crate::context::ClipContext;
use crate::error::RenderError;

const CLIP_TEMPLATE: &str = "clip.md.tera";

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

fn blockquote(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("blockquote filter expects a string"))?;
    Ok(Value::String(format!("> {}", text.replace('\n', "\n> "))))
}

fn yaml_escape(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("yaml_escape filter expects a string"))?;
    Ok(Value::String(text.replace('"', "\\\"")))
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for clip documents.
///
/// Uses the embedded template only. Create once with [`Renderer::new`] and
/// reuse; rendering is pure and deterministic.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded template and filters.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.register_filter("blockquote", blockquote);
        tera.register_filter("yaml_escape", yaml_escape);
        tera.add_raw_templates(vec![(
            CLIP_TEMPLATE,
            include_str!("templates/clip.md.tera"),
        )])?;
        Ok(Renderer { tera })
    }

    /// Render the markdown document for `ctx`.
    pub fn render(&self, ctx: &ClipContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(CLIP_TEMPLATE, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
