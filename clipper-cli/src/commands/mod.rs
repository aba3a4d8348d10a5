//! Subcommand implementations and shared helpers.

pub mod clip;
pub mod render;
pub mod serve;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use clipper_core::{Clip, Config};

/// Resolve and load the configuration: an explicit `--config` path, else
/// `~/.clipper/config.yaml`, layered under the environment.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => dirs::home_dir().map(|home| home.join(".clipper").join("config.yaml")),
    };
    Config::load(path.as_deref()).context("failed to load configuration")
}

/// Read and validate a clip payload from a JSON file, or stdin when no
/// file is given.
pub(crate) fn read_clip(file: Option<&Path>) -> Result<Clip> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read clip payload from stdin")?;
            buf
        }
    };
    let clip: Clip = serde_json::from_str(&raw).context("clip payload is not valid JSON")?;
    clip.validate().context("clip payload rejected")?;
    Ok(clip)
}
