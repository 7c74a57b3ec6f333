//! Provider configuration from TOML (`[providers]` section)

use advisor_domain::{AnthropicProviderConfig, OpenAiProviderConfig, ProviderConfig};
use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Base URL for the OpenAI API (can be overridden for proxies or Azure OpenAI).
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let defaults = OpenAiProviderConfig::default();
        Self {
            base_url: defaults.base_url,
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        let defaults = AnthropicProviderConfig::default();
        Self {
            base_url: defaults.base_url,
            api_version: defaults.api_version,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
}

impl FileProvidersConfig {
    /// Convert to the serde-free domain configuration.
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            openai: OpenAiProviderConfig {
                base_url: self.openai.base_url.clone(),
            },
            anthropic: AnthropicProviderConfig {
                base_url: self.anthropic.base_url.clone(),
                api_version: self.anthropic.api_version.clone(),
            },
        }
    }
}
