//! Governance advisory: tasks, results and reply normalization.
//!
//! A caller hands the advisor one [`GovernanceTask`]; whatever the provider
//! replies (or fails to reply), the advisor hands back the matching
//! [`AdvisoryResult`]. Fallback content lives in [`fallback`], reply parsing
//! in [`normalize`].

pub mod fallback;
pub mod normalize;
pub mod rating;
pub mod request;
pub mod results;
pub mod tasks;

pub use normalize::{Normalized, ReplyOutcome};
pub use rating::{HealthRating, RiskLevel};
pub use request::ProviderRequest;
pub use results::{AdvisoryResult, InsightsResult, ProposalAnalysisResult, Sentiment};
pub use tasks::{
    GovernanceTask, ImprovementRequest, InsightsRequest, ProposalAnalysisRequest, TaskKind,
};
