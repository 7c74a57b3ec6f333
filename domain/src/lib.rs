//! Domain layer for dao-advisor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Provider**: an external AI service (OpenAI, Anthropic, or the stub
//!   LazAI). Exactly one is active at a time, chosen by fixed priority.
//! - **Governance task**: proposal analysis, health insights, or
//!   improvement suggestions.
//! - **Fallback**: the fixed result returned when no provider is configured
//!   or a call fails. Advisory operations never surface an error.

pub mod advisory;
pub mod core;
pub mod prompt;
pub mod providers;
pub mod util;

// Re-export commonly used types
pub use advisory::{
    AdvisoryResult, GovernanceTask, HealthRating, ImprovementRequest, InsightsRequest,
    InsightsResult, Normalized, ProposalAnalysisRequest, ProposalAnalysisResult,
    ProviderRequest, ReplyOutcome, RiskLevel, Sentiment, TaskKind, fallback,
    normalize::{normalize, normalize_insights, normalize_proposal_analysis, normalize_suggestions},
};
pub use core::error::DomainError;
pub use prompt::GovernancePromptTemplate;
pub use providers::{
    AnthropicProviderConfig, CredentialSet, OpenAiProviderConfig, ProviderConfig,
    ProviderEnvelope, ProviderHandle, ProviderId,
};
