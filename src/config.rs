use crate::error::{BrainScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deployment constant for the hosted classifier. No trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://brain-tumor-backend-8h91.onrender.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BrainScanError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("brainscan").join("config.json"))
    }

    /// Effective base URL: environment variable wins over the stored value.
    pub fn effective_base_url(&self) -> String {
        if let Ok(url) = std::env::var("BRAINSCAN_API_BASE") {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.base_url.clone()
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = url;
        self.save()
    }
}
