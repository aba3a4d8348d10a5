//! Process configuration — loaded once at startup, immutable afterwards.
//!
//! Sources, later wins:
//! 1. optional YAML config file (`auth_token`, `github_token`, `repo`,
//!    `branch`, `bind` keys),
//! 2. environment variables `AUTH_TOKEN`, `GITHUB_TOKEN`, `GITHUB_REPO`,
//!    `GITHUB_BRANCH`, `CLIPPER_BIND`.
//!
//! The three credentials/identifiers are required; `branch` and `bind`
//! have defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Branch committed to when `GITHUB_BRANCH` is unset.
pub const DEFAULT_BRANCH: &str = "main";

/// Listen address when `CLIPPER_BIND` is unset.
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Immutable process-wide configuration.
///
/// Constructed once at startup and passed by parameter into the gateway
/// and the reconciler; never read as ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret the clipping client must present as a bearer token.
    pub auth_token: String,
    /// Service credential for the GitHub contents API.
    pub github_token: String,
    /// Target repository, `owner/name`.
    pub repo: String,
    /// Target branch.
    pub branch: String,
    /// Gateway listen address.
    pub bind_addr: String,
}

/// On-disk YAML shape. Every key optional — the environment fills gaps.
#[derive(Debug, Default, Clone, Deserialize)]
struct FileConfig {
    auth_token: Option<String>,
    github_token: Option<String>,
    repo: Option<String>,
    branch: Option<String>,
    bind: Option<String>,
}

impl Config {
    /// Build configuration from the environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(FileConfig::default(), env_lookup)
    }

    /// Build configuration from an optional YAML file layered under the
    /// environment. A missing file is not an error; an unreadable or
    /// malformed one is.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_cfg = match file {
            Some(path) if path.exists() => read_file(path)?,
            _ => FileConfig::default(),
        };
        Self::build(file_cfg, env_lookup)
    }

    fn build(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let pick = |var: &'static str, from_file: Option<String>| {
            env(var).filter(|v| !v.is_empty()).or(from_file)
        };

        let auth_token =
            pick("AUTH_TOKEN", file.auth_token).ok_or(ConfigError::Missing("AUTH_TOKEN"))?;
        let github_token =
            pick("GITHUB_TOKEN", file.github_token).ok_or(ConfigError::Missing("GITHUB_TOKEN"))?;
        let repo = pick("GITHUB_REPO", file.repo).ok_or(ConfigError::Missing("GITHUB_REPO"))?;
        let branch =
            pick("GITHUB_BRANCH", file.branch).unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        let bind_addr = pick("CLIPPER_BIND", file.bind).unwrap_or_else(|| DEFAULT_BIND.to_string());

        Ok(Config {
            auth_token,
            github_token,
            repo,
            branch,
            bind_addr,
        })
    }
}

fn env_lookup(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn env_only_with_defaults() {
        let cfg = Config::build(
            FileConfig::default(),
            env_of(&[
                ("AUTH_TOKEN", "secret"),
                ("GITHUB_TOKEN", "ghp_x"),
                ("GITHUB_REPO", "alice/site"),
            ]),
        )
        .expect("config");
        assert_eq!(cfg.auth_token, "secret");
        assert_eq!(cfg.branch, DEFAULT_BRANCH);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND);
    }

    #[test]
    fn env_overrides_file() {
        let file = FileConfig {
            auth_token: Some("file-secret".to_string()),
            github_token: Some("file-token".to_string()),
            repo: Some("file/repo".to_string()),
            branch: Some("pages".to_string()),
            bind: None,
        };
        let cfg = Config::build(file, env_of(&[("AUTH_TOKEN", "env-secret")])).expect("config");
        assert_eq!(cfg.auth_token, "env-secret");
        assert_eq!(cfg.github_token, "file-token");
        assert_eq!(cfg.branch, "pages");
    }

    #[test]
    fn empty_env_value_does_not_shadow_file() {
        let file = FileConfig {
            auth_token: Some("file-secret".to_string()),
            github_token: Some("t".to_string()),
            repo: Some("r/r".to_string()),
            branch: None,
            bind: None,
        };
        let cfg = Config::build(file, env_of(&[("AUTH_TOKEN", "")])).expect("config");
        assert_eq!(cfg.auth_token, "file-secret");
    }

    #[test]
    fn missing_required_value_errors() {
        let err = Config::build(FileConfig::default(), env_of(&[("AUTH_TOKEN", "x")]))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Missing("GITHUB_TOKEN")));
    }

    #[test]
    fn load_reads_yaml_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("clipper.yaml");
        std::fs::write(
            &path,
            "auth_token: ys\ngithub_token: yt\nrepo: y/r\nbranch: pages\n",
        )
        .expect("write config");

        let file_cfg = read_file(&path).expect("read");
        let cfg = Config::build(file_cfg, |_| None).expect("config");
        assert_eq!(cfg.repo, "y/r");
        assert_eq!(cfg.branch, "pages");
    }

    #[test]
    fn malformed_yaml_surfaces_parse_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "auth_token: [unclosed\n").expect("write config");
        let err = read_file(&path).expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
