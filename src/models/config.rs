use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::InventoryError,
    models::web::{CLOUDFLARE_IMAGE_URL, CSFLOAT_API_URL, STEAM_IMAGE_URL},
};

pub const DEFAULT_CONCURRENCY: usize = 100;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnrichConfig {
    pub concurrency: usize, // Hard cap on in flight inspection requests
    pub inspect_api_url: String,
    pub owner_steamid: Option<u64>,
    pub request_timeout_secs: u64,
    pub max_attempts: u8, // 1 means no retry
    pub retry_pause_ms: u64,
    pub image_base_url: String,
    pub image_mirror_url: String,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        EnrichConfig {
            concurrency: DEFAULT_CONCURRENCY,
            inspect_api_url: CSFLOAT_API_URL.to_string(),
            owner_steamid: None,
            request_timeout_secs: 10,
            max_attempts: 1,
            retry_pause_ms: 500,
            image_base_url: STEAM_IMAGE_URL.to_string(),
            image_mirror_url: CLOUDFLARE_IMAGE_URL.to_string(),
        }
    }
}

impl EnrichConfig {
    /// Reads a JSON config file. Missing keys fall back to their defaults.
    pub fn from_path(path: &Path) -> Result<Self, InventoryError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| InventoryError::Config(format!("Could not read {}: {}", path.display(), e)))?;

        let config: EnrichConfig = serde_json::from_str(&raw)
            .map_err(|e| InventoryError::Config(format!("Could not parse {}: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InventoryError> {
        if self.concurrency == 0 {
            return Err(InventoryError::Config("concurrency must be at least 1".into()));
        }
        if self.max_attempts == 0 {
            return Err(InventoryError::Config("max_attempts must be at least 1".into()));
        }
        if self.inspect_api_url.is_empty() {
            return Err(InventoryError::Config("inspect_api_url can't be empty".into()));
        }
        Ok(())
    }
}
