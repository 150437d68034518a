use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::DEFAULT_MAX_ANNUAL_PRICE;
use crate::wizard::property::DEFAULT_MAX_PHOTOS;

/// Client settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// How long the mock login takes to answer
    pub login_delay_ms: u64,
    /// Photo slots on a new listing
    pub max_photos: usize,
    /// Starting price ceiling for the browse filter
    pub max_annual_price: i64,
    /// Where the demo writes its search results, if anywhere
    pub export_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 1000,
            max_photos: DEFAULT_MAX_PHOTOS,
            max_annual_price: DEFAULT_MAX_ANNUAL_PRICE,
            export_path: None,
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Defaults, then `HOSTEL_CONFIG` if set, then individual `HOSTEL_*` overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup("HOSTEL_CONFIG") {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(raw) = lookup("HOSTEL_LOGIN_DELAY_MS") {
            config.login_delay_ms = raw
                .parse()
                .with_context(|| format!("HOSTEL_LOGIN_DELAY_MS is not a number: {raw}"))?;
        }
        if let Some(raw) = lookup("HOSTEL_MAX_PHOTOS") {
            config.max_photos = raw
                .parse()
                .with_context(|| format!("HOSTEL_MAX_PHOTOS is not a number: {raw}"))?;
        }
        if let Some(raw) = lookup("HOSTEL_MAX_ANNUAL_PRICE") {
            config.max_annual_price = raw
                .parse()
                .with_context(|| format!("HOSTEL_MAX_ANNUAL_PRICE is not a number: {raw}"))?;
        }
        if let Some(raw) = lookup("HOSTEL_EXPORT_PATH") {
            config.export_path = Some(PathBuf::from(raw));
        }

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}
