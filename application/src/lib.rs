//! Application layer for dao-advisor
//!
//! This crate contains the advisory use case and the port definitions it
//! depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    advisory_logger::{AdvisoryEvent, AdvisoryLogger, NoAdvisoryLogger},
    credential_store::{
        CREDENTIAL_RECORD, CredentialStore, CredentialStoreError, InMemoryCredentialStore,
    },
    llm_gateway::{GatewayError, LlmGateway},
};
pub use use_cases::governance_advisor::GovernanceAdvisor;
