//! Configuration loading and management
//!
//! The backend base URL is always an explicit value handed to the API client
//! at construction; nothing in the crate reads the environment implicitly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "NORTHWIND_API_URL";

/// Environment variable overriding the default page size.
pub const PAGE_SIZE_VAR: &str = "NORTHWIND_PAGE_SIZE";

/// Configuration for the API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend (e.g. `http://localhost:8080/api`),
    /// stored without a trailing slash.
    pub base_url: String,

    /// Page size used by list requests.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    10
}

impl ApiConfig {
    /// Build a configuration with the default page size.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            page_size: default_page_size(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// `NORTHWIND_API_URL` is required; `NORTHWIND_PAGE_SIZE` is optional.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_VAR)
            .with_context(|| format!("{} is not set", API_URL_VAR))?;
        let mut config = Self::new(base_url);
        if let Ok(size) = std::env::var(PAGE_SIZE_VAR) {
            config.page_size = size
                .parse()
                .with_context(|| format!("{} is not a valid page size", PAGE_SIZE_VAR))?;
        }
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).context("invalid config file")?;
        Ok(Self {
            base_url: normalize(config.base_url),
            page_size: config.page_size,
        })
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
