//! LLM Gateway port
//!
//! Defines the interface for sending a framed request to the selected
//! provider. Implementations (adapters) live in the infrastructure layer.

use advisor_domain::{ProviderHandle, ProviderId, ProviderRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failures.
///
/// Never surfaced past the advisory facade: every variant is converted into
/// the task's fallback result.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Provider not available: {0}")]
    ProviderNotAvailable(ProviderId),
}

/// Gateway for LLM communication
///
/// Exactly one outbound attempt per call; no retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `request` using the credential bound in `handle`, returning the
    /// provider's reply text.
    async fn send(
        &self,
        handle: &ProviderHandle,
        request: &ProviderRequest,
    ) -> Result<String, GatewayError>;
}
