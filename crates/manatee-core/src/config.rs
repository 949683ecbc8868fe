//! Client configuration.
//!
//! Holds the API base URL, the refresh age of cached entities, HTTP and queue
//! tuning, and the application key. User tokens are never written here; they
//! live in the OS keychain (see [`TokenStore`](crate::TokenStore)).
//!
//! Configuration is stored at `~/.config/manatee/config.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::authorization::APP_KEY_ENV;

/// Application name used for config directory paths
const APP_NAME: &str = "manatee";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "TRELLO_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "https://api.trello.com/1";

/// Cached entity data older than this is fetched again on the next read.
const DEFAULT_REFRESH_AFTER_SECS: u64 = 30;

/// Upper bound on the refresh age; anything longer means "never refresh" in practice.
const MAX_REFRESH_AFTER_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// HTTP request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Requests that may wait in the processor queue before callers are held back.
const DEFAULT_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrelloConfig {
    pub api_base_url: String,
    pub refresh_after_secs: u64,
    pub request_timeout_secs: u64,
    pub queue_capacity: usize,
    pub app_key: Option<String>,
    /// Member shown by default in the CLI.
    pub last_member: Option<String>,
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            refresh_after_secs: DEFAULT_REFRESH_AFTER_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            app_key: None,
            last_member: None,
        }
    }
}

impl TrelloConfig {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            debug!(path = %path.display(), "Loaded configuration");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Apply `TRELLO_APP_KEY` and `TRELLO_API_URL` when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides looked up by variable name. Blank values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(key) = lookup(APP_KEY_ENV) {
            self.app_key = Some(key);
        }
        if let Some(url) = lookup(API_URL_ENV) {
            self.api_base_url = url;
        }
        self
    }

    pub fn refresh_after(&self) -> chrono::Duration {
        let secs = self.refresh_after_secs.min(MAX_REFRESH_AFTER_SECS);
        chrono::Duration::seconds(secs as i64)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
