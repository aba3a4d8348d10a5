//! `clipper clip` — commit a single clip payload without the gateway.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;

use clipper_github::{GithubContents, Reconciler};
use clipper_renderer::{derive_path, ClipContext, Renderer};

/// Arguments for `clipper clip`.
#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Clip payload JSON file (stdin when omitted).
    pub file: Option<PathBuf>,

    /// Path to a YAML config file (default: ~/.clipper/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ClipArgs {
    pub fn run(self) -> Result<()> {
        let config = super::load_config(self.config.as_deref())?;
        let clip = super::read_clip(self.file.as_deref())?;

        let timestamp = clip.effective_timestamp(Utc::now());
        let path = derive_path(&clip, &timestamp);
        let renderer = Renderer::new().context("render engine init failed")?;
        let document = renderer.render(&ClipContext::new(&clip, &timestamp))?;

        let reconciler = Reconciler::new(Arc::new(GithubContents::new(&config)));
        let receipt = reconciler
            .commit(&path, &document, clip.title.as_deref())
            .with_context(|| format!("commit failed for '{path}'"))?;

        println!("✓ committed {path}");
        if let Some(sha) = &receipt.sha {
            println!("  sha: {sha}");
        }
        if let Some(url) = &receipt.html_url {
            println!("  url: {url}");
        }
        Ok(())
    }
}
