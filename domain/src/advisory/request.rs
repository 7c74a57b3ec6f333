//! Provider request building.

use super::tasks::GovernanceTask;
use crate::prompt::GovernancePromptTemplate;
use crate::providers::ProviderId;

/// A fully framed request for one provider.
///
/// Adapters serialize this into their own wire format; the content is
/// identical across providers apart from the envelope fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub provider: ProviderId,
    pub model: String,
    /// Governance-advisor instruction placed ahead of the task prompt.
    pub system_prompt: String,
    /// Task-specific prompt.
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    pub fn build(provider: ProviderId, task: &GovernanceTask) -> Self {
        let envelope = provider.envelope();
        let prompt = match task {
            GovernanceTask::ProposalAnalysis(req) => {
                GovernancePromptTemplate::proposal_analysis(req)
            }
            GovernanceTask::Insights(req) => GovernancePromptTemplate::insights(req),
            GovernanceTask::Improvement(req) => GovernancePromptTemplate::improvement(req),
        };

        Self {
            provider,
            model: envelope.model.to_string(),
            system_prompt: GovernancePromptTemplate::system().to_string(),
            prompt,
            max_tokens: envelope.max_tokens,
            temperature: envelope.temperature,
        }
    }
}
