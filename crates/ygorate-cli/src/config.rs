use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use ygorate_client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Optional `<data-dir>/config.toml`. A missing file is the default config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Effective API base URL: command-line override, then config file,
    /// then the public YGOPRODeck endpoint.
    pub fn api_base_url(&self, override_url: Option<&str>) -> String {
        if let Some(url) = override_url {
            return url.to_string();
        }
        self.api
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn api_timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}
