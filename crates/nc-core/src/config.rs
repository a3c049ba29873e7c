//! Application configuration.
//!
//! Read from `newscredible.toml` in the project directory when present.
//! The `NEWSCREDIBLE_BACKEND_URL` environment variable overrides the
//! configured backend base URL.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NcError, NcResult};

/// Config file name looked up in the project directory.
pub const CONFIG_FILE: &str = "newscredible.toml";

/// Default base URL of the analysis backend.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analysis backend the four tools dispatch to.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from `newscredible.toml` under `project_dir`.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(project_dir: &Path) -> NcResult<Self> {
        let path = project_dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            toml::from_str(&raw).map_err(|e| NcError::Config(e.to_string()))?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("NEWSCREDIBLE_BACKEND_URL") {
            if !url.is_empty() {
                config.backend_url = url;
            }
        }

        debug!(backend_url = %config.backend_url, "Configuration loaded");
        Ok(config)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
