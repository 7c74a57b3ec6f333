//! AI provider identities, credentials and endpoint settings.
//!
//! The advisory client talks to exactly one provider per task. Which one is
//! decided by [`CredentialSet::select`] using the fixed [`ProviderId::PRIORITY`]
//! order; the request framing for each provider is a fixed
//! [`ProviderEnvelope`].

mod credentials;
mod settings;

pub use credentials::{CredentialSet, ProviderHandle};
pub use settings::{AnthropicProviderConfig, OpenAiProviderConfig, ProviderConfig};

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// AI provider backing the governance advisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAi,
    Anthropic,
    /// Placeholder provider; its transport is a local stub.
    LazAi,
}

/// Provider-specific request framing. Fixed per provider, never per task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderEnvelope {
    pub model: &'static str,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl ProviderId {
    /// Selection order when more than one credential is configured.
    pub const PRIORITY: [ProviderId; 3] =
        [ProviderId::OpenAi, ProviderId::Anthropic, ProviderId::LazAi];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::LazAi => "lazai",
        }
    }

    /// Human-readable name for console output
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "OpenAI",
            ProviderId::Anthropic => "Anthropic",
            ProviderId::LazAi => "LazAI",
        }
    }

    pub fn envelope(&self) -> ProviderEnvelope {
        match self {
            ProviderId::OpenAi => ProviderEnvelope {
                model: "gpt-4",
                max_tokens: 1000,
                temperature: Some(0.7),
            },
            ProviderId::Anthropic => ProviderEnvelope {
                model: "claude-3-sonnet-20240229",
                max_tokens: 1000,
                temperature: None,
            },
            ProviderId::LazAi => ProviderEnvelope {
                model: "lazai-stub",
                max_tokens: 1000,
                temperature: None,
            },
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderId::OpenAi),
            "anthropic" => Ok(ProviderId::Anthropic),
            "lazai" => Ok(ProviderId::LazAi),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}
