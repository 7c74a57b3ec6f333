//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod logging;
mod providers;
mod storage;

pub use logging::FileLoggingConfig;
pub use providers::{FileAnthropicConfig, FileOpenAiConfig, FileProvidersConfig};
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("providers.{provider}.base_url must start with http:// or https:// (got '{url}')")]
    InvalidBaseUrl { provider: &'static str, url: String },

    #[error("providers.anthropic.api_version cannot be empty")]
    EmptyApiVersion,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider endpoint settings
    pub providers: FileProvidersConfig,
    /// Credential storage settings
    pub storage: FileStorageConfig,
    /// Advisory event log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let endpoints = [
            ("openai", &self.providers.openai.base_url),
            ("anthropic", &self.providers.anthropic.base_url),
        ];
        for (provider, url) in endpoints {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigValidationError::InvalidBaseUrl {
                    provider,
                    url: url.clone(),
                });
            }
        }

        if self.providers.anthropic.api_version.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiVersion);
        }

        Ok(())
    }
}
