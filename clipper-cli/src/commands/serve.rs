//! `clipper serve` — run the clip gateway in the foreground.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for `clipper serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to a YAML config file (default: ~/.clipper/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen address override, e.g. 0.0.0.0:8787.
    #[arg(long)]
    pub bind: Option<String>,
}

impl ServeArgs {
    pub fn run(self) -> Result<()> {
        let mut config = super::load_config(self.config.as_deref())?;
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        clipper_server::start_blocking(config).context("gateway exited with error")
    }
}
