//! Application configuration management.
//!
//! The config file remembers the backend origin and the last signed-in
//! email. The backend origin itself is resolved once at startup - the
//! `HANDRAISE_API_URL` environment variable wins over the config file,
//! which wins over the default - and is immutable afterwards.
//!
//! Configuration is stored at `~/.config/handraise/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/log directory paths
const APP_NAME: &str = "handraise";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the backend origin
const BACKEND_URL_ENV: &str = "HANDRAISE_API_URL";

/// Default backend origin for local development
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub backend_url: Option<String>,
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// The backend origin for this process.
    pub fn backend_origin(&self) -> String {
        resolve_origin(
            std::env::var(BACKEND_URL_ENV).ok(),
            self.backend_url.as_deref(),
        )
    }

    /// Directory for the log file.
    pub fn log_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}

fn resolve_origin(env_value: Option<String>, configured: Option<&str>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
