//! LazAI adapter.
//!
//! LazAI has no public API yet; the adapter answers locally with a fixed
//! acknowledgement instead of making a network call.

use super::ProviderAdapter;
use advisor_application::GatewayError;
use advisor_domain::util::truncate_chars;
use advisor_domain::{ProviderId, ProviderRequest};
use async_trait::async_trait;
use tracing::debug;

/// Number of prompt characters echoed in the stub reply.
const PROMPT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Default)]
pub struct LazAiAdapter;

impl LazAiAdapter {
    pub fn new() -> Self {
        Self
    }

    /// The deterministic placeholder reply for `prompt`.
    pub fn stub_reply(prompt: &str) -> String {
        format!(
            "LazAI Analysis: {}... (Integration pending)",
            truncate_chars(prompt, PROMPT_PREVIEW_CHARS)
        )
    }
}

#[async_trait]
impl ProviderAdapter for LazAiAdapter {
    fn kind(&self) -> ProviderId {
        ProviderId::LazAi
    }

    async fn send(
        &self,
        _credential: &str,
        request: &ProviderRequest,
    ) -> Result<String, GatewayError> {
        debug!(model = %request.model, "LazAI integration pending, returning stub reply");
        Ok(Self::stub_reply(&request.prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{GovernanceTask, ImprovementRequest};

    #[test]
    fn test_stub_reply_truncates_prompt() {
        let prompt = "x".repeat(250);
        let reply = LazAiAdapter::stub_reply(&prompt);
        assert_eq!(
            reply,
            format!("LazAI Analysis: {}... (Integration pending)", "x".repeat(100))
        );
    }

    #[test]
    fn test_stub_reply_short_prompt() {
        assert_eq!(
            LazAiAdapter::stub_reply("Treasury"),
            "LazAI Analysis: Treasury... (Integration pending)"
        );
    }

    #[test]
    fn test_stub_reply_counts_characters() {
        let prompt = "é".repeat(120);
        let reply = LazAiAdapter::stub_reply(&prompt);
        assert!(reply.contains(&"é".repeat(100)));
        assert!(!reply.contains(&"é".repeat(101)));
    }

    #[tokio::test]
    async fn test_send_uses_prompt_only() {
        let task = GovernanceTask::Improvement(ImprovementRequest::new("Fund a hackathon"));
        let request = ProviderRequest::build(ProviderId::LazAi, &task);

        let reply = LazAiAdapter::new().send("lz-key", &request).await.unwrap();
        assert_eq!(reply, LazAiAdapter::stub_reply(&request.prompt));
        assert!(!reply.contains(&request.system_prompt));
    }
}
