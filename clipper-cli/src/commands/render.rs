//! `clipper render` — preview the derived path and markdown for a clip.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use clipper_renderer::{derive_path, ClipContext, Renderer};

/// Arguments for `clipper render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Clip payload JSON file (stdin when omitted).
    pub file: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let clip = super::read_clip(self.file.as_deref())?;

        let timestamp = clip.effective_timestamp(Utc::now());
        let path = derive_path(&clip, &timestamp);
        let renderer = Renderer::new().context("render engine init failed")?;
        let document = renderer.render(&ClipContext::new(&clip, &timestamp))?;

        println!("{path}");
        println!();
        print!("{document}");
        Ok(())
    }
}
