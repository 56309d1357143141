use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const APP_NAME: &str = "btcpay-checkout";

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
/// Environment variable consulted by the binary before the config reaches the client.
pub const API_URL_ENV: &str = "API_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    #[default]
    Http,
    Mock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub kind: ClientKind,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            kind: ClientKind::default(),
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl AppConfig {
    /// Replaces the base URL when `base_url` is set and non-blank.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    pub fn with_kind(mut self, kind: Option<ClientKind>) -> Self {
        if let Some(kind) = kind {
            self.api.kind = kind;
        }
        self
    }
}

pub fn load() -> Result<AppConfig> {
    let cfg: AppConfig = confy::load(APP_NAME, None).context("Failed to load app config")?;
    Ok(cfg)
}

pub fn load_path(path: &Path) -> Result<AppConfig> {
    let cfg: AppConfig = confy::load_path(path)
        .with_context(|| format!("Failed to load app config from {}", path.display()))?;
    Ok(cfg)
}
