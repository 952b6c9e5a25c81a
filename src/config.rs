//! API client configuration.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL. `PORTFOLIO_API_URL` overrides the configured value.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Where the auth token is persisted. Defaults to the platform config
    /// directory when unset.
    pub token_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            token_path: None,
        }
    }
}

impl ApiConfig {
    /// Load from a TOML file, then apply env overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        config.apply_env();
        Ok(config)
    }

    /// Defaults plus env overrides, for setups without a config file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        self.apply_base_url_override(std::env::var("PORTFOLIO_API_URL").ok());
    }

    /// Apply an override of the base URL, ignoring unset or blank values.
    fn apply_base_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }

    /// Resolved token file path: the configured one, or `token` under the
    /// platform config directory.
    pub fn token_file(&self) -> PathBuf {
        if let Some(path) = &self.token_path {
            return path.clone();
        }
        directories::ProjectDirs::from("", "", "portfolio")
            .map(|dirs| dirs.config_dir().join("token"))
            .unwrap_or_else(|| PathBuf::from(".portfolio/token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.token_path.is_none());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: ApiConfig = toml::from_str(
            r#"
            base_url = "https://portfolio.example.com"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://portfolio.example.com");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[test]
    fn configured_token_path_wins() {
        let config = ApiConfig {
            token_path: Some(PathBuf::from("/tmp/portfolio-token")),
            ..ApiConfig::default()
        };
        assert_eq!(config.token_file(), PathBuf::from("/tmp/portfolio-token"));
    }

    #[test]
    fn default_token_path_is_under_config_dir() {
        let config = ApiConfig::default();
        let path = config.token_file();
        assert!(path.ends_with("token"));
    }

    #[test]
    fn override_replaces_base_url() {
        let mut config = ApiConfig::default();
        config.apply_base_url_override(Some("https://env.example.com".into()));
        assert_eq!(config.base_url, "https://env.example.com");
    }

    #[test]
    fn unset_or_blank_override_is_ignored() {
        let mut config = ApiConfig::default();
        config.apply_base_url_override(None);
        assert_eq!(config.base_url, "http://localhost:8000");

        config.apply_base_url_override(Some("   ".into()));
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
