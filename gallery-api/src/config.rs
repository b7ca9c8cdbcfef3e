use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{ApiError, ApiResult};

pub const DEFAULT_API_URL: &str = "https://photos-backend-page-cwvu.onrender.com/api";
/// Overrides the API base URL
pub const API_URL_ENV: &str = "GALLERY_API_URL";
/// Points at a TOML config file
pub const CONFIG_PATH_ENV: &str = "GALLERY_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "gallery.toml";

/// Runtime configuration for the gallery client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Base URL all collection paths are appended to
    pub api_base_url: String,
    /// Maximum number of photo pipelines running at once
    pub upload_concurrency: usize,
    pub connect_timeout_secs: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            upload_concurrency: 3,
            connect_timeout_secs: 10,
        }
    }
}

impl GalleryConfig {
    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml(s: &str) -> ApiResult<Self> {
        toml::from_str(s).map_err(|e| ApiError::InvalidConfig(e.to_string()))
    }

    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    /// Trim the base URL and reject values the client cannot work with
    pub fn validated(mut self) -> ApiResult<Self> {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ApiError::InvalidConfig(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.upload_concurrency == 0 {
            return Err(ApiError::InvalidConfig(
                "upload_concurrency must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// Defaults, then the optional config file, then the environment
    pub fn load() -> ApiResult<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let base = if path.exists() {
            log::info!("Loading configuration from {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            Self::from_toml(&contents)?
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        let config = base
            .with_api_url_override(std::env::var(API_URL_ENV).ok())
            .validated()?;
        log::info!("Using gallery API at {}", config.api_base_url);
        Ok(config)
    }
}
