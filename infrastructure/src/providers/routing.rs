use super::ProviderAdapter;
use super::anthropic::AnthropicAdapter;
use super::lazai::LazAiAdapter;
use super::openai::OpenAiAdapter;
use advisor_application::{GatewayError, LlmGateway};
use advisor_domain::{ProviderConfig, ProviderHandle, ProviderId, ProviderRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Gateway that forwards each request to the adapter for the handle's provider.
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { providers }
    }

    /// Build a gateway with one adapter per provider, sharing a single HTTP client.
    pub fn from_config(config: &ProviderConfig) -> Self {
        let client = reqwest::Client::new();
        let openai: Arc<dyn ProviderAdapter> =
            Arc::new(OpenAiAdapter::with_client(client.clone(), &config.openai));
        let anthropic: Arc<dyn ProviderAdapter> =
            Arc::new(AnthropicAdapter::with_client(client, &config.anthropic));
        let lazai: Arc<dyn ProviderAdapter> = Arc::new(LazAiAdapter::new());
        Self::new(vec![openai, anthropic, lazai])
    }

    fn resolve_provider(&self, provider: ProviderId) -> Result<&dyn ProviderAdapter, GatewayError> {
        self.providers
            .iter()
            .find(|p| p.kind() == provider)
            .map(|p| p.as_ref())
            .ok_or(GatewayError::ProviderNotAvailable(provider))
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn send(
        &self,
        handle: &ProviderHandle,
        request: &ProviderRequest,
    ) -> Result<String, GatewayError> {
        let adapter = self.resolve_provider(handle.provider())?;
        debug!(provider = %handle.provider(), model = %request.model, "Routing request");
        adapter.send(handle.credential(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{GovernanceTask, ImprovementRequest};
    use std::sync::Mutex;

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockProvider {
        kind: ProviderId,
        seen_credentials: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn new(kind: ProviderId) -> Arc<Self> {
            Arc::new(Self {
                kind,
                seen_credentials: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockProvider {
        fn kind(&self) -> ProviderId {
            self.kind
        }

        async fn send(
            &self,
            credential: &str,
            _request: &ProviderRequest,
        ) -> Result<String, GatewayError> {
            self.seen_credentials
                .lock()
                .unwrap()
                .push(credential.to_string());
            Ok(format!("reply from {}", self.kind))
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn request(provider: ProviderId) -> ProviderRequest {
        let task = GovernanceTask::Improvement(ImprovementRequest::new("Fund a hackathon"));
        ProviderRequest::build(provider, &task)
    }

    // -- Tests -----------------------------------------------------------------

    #[tokio::test]
    async fn test_routes_to_matching_adapter() {
        let openai = MockProvider::new(ProviderId::OpenAi);
        let anthropic = MockProvider::new(ProviderId::Anthropic);
        let gateway = RoutingGateway::new(vec![
            openai.clone() as Arc<dyn ProviderAdapter>,
            anthropic.clone() as Arc<dyn ProviderAdapter>,
        ]);

        let handle = ProviderHandle::new(ProviderId::Anthropic, "sk-ant");
        let reply = gateway
            .send(&handle, &request(ProviderId::Anthropic))
            .await
            .unwrap();

        assert_eq!(reply, "reply from anthropic");
        assert_eq!(*anthropic.seen_credentials.lock().unwrap(), vec!["sk-ant"]);
        assert!(openai.seen_credentials.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_adapter_is_provider_not_available() {
        let openai: Arc<dyn ProviderAdapter> = MockProvider::new(ProviderId::OpenAi);
        let gateway = RoutingGateway::new(vec![openai]);

        let handle = ProviderHandle::new(ProviderId::LazAi, "lz");
        let err = gateway
            .send(&handle, &request(ProviderId::LazAi))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GatewayError::ProviderNotAvailable(ProviderId::LazAi)
        ));
    }

    #[tokio::test]
    async fn test_empty_gateway_rejects_everything() {
        let gateway = RoutingGateway::new(vec![]);
        for provider in ProviderId::PRIORITY {
            let handle = ProviderHandle::new(provider, "key");
            assert!(gateway.send(&handle, &request(provider)).await.is_err());
        }
    }

    #[tokio::test]
    async fn test_from_config_registers_every_provider() {
        let gateway = RoutingGateway::from_config(&ProviderConfig::default());
        for provider in ProviderId::PRIORITY {
            assert_eq!(gateway.resolve_provider(provider).unwrap().kind(), provider);
        }

        // LazAI answers without touching the network
        let handle = ProviderHandle::new(ProviderId::LazAi, "lz");
        let reply = gateway
            .send(&handle, &request(ProviderId::LazAi))
            .await
            .unwrap();
        assert!(reply.starts_with("LazAI Analysis: "));
    }
}
