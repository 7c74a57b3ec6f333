//! Credential set and provider selection.

use super::ProviderId;
use serde::{Deserialize, Serialize};

/// API credentials keyed by provider.
///
/// Persisted by the credential store as the `alith-config` record, so the
/// field names match that record (`openaiApiKey`, ...). An empty string is
/// treated the same as an absent key.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anthropic_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazai_api_key: Option<String>,
}

impl CredentialSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, provider: ProviderId, key: impl Into<String>) -> Self {
        *self.slot_mut(provider) = Some(key.into());
        self
    }

    /// The non-empty key for `provider`, if any.
    pub fn key(&self, provider: ProviderId) -> Option<&str> {
        let slot = match provider {
            ProviderId::OpenAi => &self.openai_api_key,
            ProviderId::Anthropic => &self.anthropic_api_key,
            ProviderId::LazAi => &self.lazai_api_key,
        };
        slot.as_deref().filter(|k| !k.is_empty())
    }

    fn slot_mut(&mut self, provider: ProviderId) -> &mut Option<String> {
        match provider {
            ProviderId::OpenAi => &mut self.openai_api_key,
            ProviderId::Anthropic => &mut self.anthropic_api_key,
            ProviderId::LazAi => &mut self.lazai_api_key,
        }
    }

    /// Apply a partial update: every key present in `update` replaces the
    /// stored one, absent keys are left untouched.
    pub fn merge(&mut self, update: CredentialSet) {
        for provider in ProviderId::PRIORITY {
            let incoming = update.slot(provider).clone();
            if incoming.is_some() {
                *self.slot_mut(provider) = incoming;
            }
        }
    }

    fn slot(&self, provider: ProviderId) -> &Option<String> {
        match provider {
            ProviderId::OpenAi => &self.openai_api_key,
            ProviderId::Anthropic => &self.anthropic_api_key,
            ProviderId::LazAi => &self.lazai_api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        ProviderId::PRIORITY.iter().any(|p| self.key(*p).is_some())
    }

    /// Providers with a usable key, in priority order.
    pub fn configured_providers(&self) -> Vec<ProviderId> {
        ProviderId::PRIORITY
            .into_iter()
            .filter(|p| self.key(*p).is_some())
            .collect()
    }

    /// Pick the active provider: OpenAI, then Anthropic, then LazAI.
    ///
    /// Returns `None` when nothing is configured.
    pub fn select(&self) -> Option<ProviderHandle> {
        ProviderId::PRIORITY.into_iter().find_map(|provider| {
            self.key(provider).map(|key| ProviderHandle {
                provider,
                credential: key.to_string(),
            })
        })
    }
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |slot: &Option<String>| slot.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("CredentialSet")
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("anthropic_api_key", &redact(&self.anthropic_api_key))
            .field("lazai_api_key", &redact(&self.lazai_api_key))
            .finish()
    }
}

/// A provider bound to its credential for the duration of one task.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderHandle {
    provider: ProviderId,
    credential: String,
}

impl ProviderHandle {
    pub fn new(provider: ProviderId, credential: impl Into<String>) -> Self {
        Self {
            provider,
            credential: credential.into(),
        }
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("provider", &self.provider)
            .field("credential", &"[REDACTED]")
            .finish()
    }
}
