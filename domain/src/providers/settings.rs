//! Provider endpoint configuration (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

/// Top-level provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// OpenAI API settings.
    pub openai: OpenAiProviderConfig,
    /// Anthropic API settings.
    pub anthropic: AnthropicProviderConfig,
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    /// Base URL for the OpenAI API.
    pub base_url: String,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone)]
pub struct AnthropicProviderConfig {
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for AnthropicProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
        }
    }
}
