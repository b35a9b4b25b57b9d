//! Configuration loading.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/mediabin/config.toml` on Linux). A missing file yields the
//! defaults; a malformed one is an error, not a silent fallback. The
//! `--server` flag overrides the configured base URL for one invocation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Backend origin assumed when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub downloads: DownloadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Origin of the upload server, scheme included, no trailing slash.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DownloadConfig {
    /// Where `get` saves files when no explicit output path is given.
    /// Tilde expansion applies.
    pub dir: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
        }
    }
}

impl Config {
    /// Platform path of the config file, if a home directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mediabin")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the platform path; absent file means defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.normalize();
        Ok(config)
    }

    /// Apply a one-shot `--server` override, if given.
    pub fn with_server_override(mut self, server: Option<String>) -> Self {
        if let Some(base_url) = server {
            self.server.base_url = base_url;
        }
        self.normalize();
        self
    }

    /// Resolved download directory with `~` expanded.
    pub fn download_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.downloads.dir).into_owned())
    }

    /// URL joins concatenate `base_url` with `/api/...` paths, so a trailing
    /// slash here would produce `//` in every request.
    fn normalize(&mut self) {
        while self.server.base_url.ends_with('/') {
            self.server.base_url.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_server() {
        let config = Config::default();
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.downloads.dir, ".");
    }

    #[test]
    fn loads_a_partial_file_on_top_of_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbase_url = \"https://media.example.com/\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.base_url, "https://media.example.com");
        assert_eq!(config.downloads.dir, ".");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = \"not a table\"\n[server]").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn server_flag_overrides_and_loses_its_trailing_slash() {
        let config =
            Config::default().with_server_override(Some("http://10.0.0.5:8000/".to_string()));
        assert_eq!(config.server.base_url, "http://10.0.0.5:8000");

        let untouched = Config::default().with_server_override(None);
        assert_eq!(untouched.server.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn download_dir_expands_the_tilde() {
        let mut config = Config::default();
        config.downloads.dir = "~/media".to_string();
        let dir = config.download_dir();
        assert!(!dir.to_string_lossy().starts_with('~'));
        assert!(dir.ends_with("media"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.server.base_url = "http://192.168.1.20:8000".to_string();
        config.downloads.dir = "~/Downloads".to_string();

        let raw = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
