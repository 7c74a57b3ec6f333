//! Anthropic Messages API adapter.

use super::{ProviderAdapter, endpoint, send_json};
use advisor_application::GatewayError;
use advisor_domain::{AnthropicProviderConfig, ProviderId, ProviderRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MESSAGES_PATH: &str = "/v1/messages";

pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl AnthropicAdapter {
    pub fn new(config: &AnthropicProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &AnthropicProviderConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_version: config.api_version.clone(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    async fn send(
        &self,
        credential: &str,
        request: &ProviderRequest,
    ) -> Result<String, GatewayError> {
        let url = endpoint(&self.base_url, MESSAGES_PATH);
        debug!(model = %request.model, %url, "Sending Anthropic message");

        let body = MessagesRequest::from_request(request);
        let response: MessagesResponse = send_json(
            self.client
                .post(&url)
                .header("x-api-key", credential)
                .header("anthropic-version", &self.api_version)
                .json(&body),
        )
        .await?;

        response.into_text().ok_or_else(|| {
            GatewayError::MalformedEnvelope("missing text content block".to_string())
        })
    }
}

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> MessagesRequest<'a> {
    fn from_request(request: &'a ProviderRequest) -> Self {
        Self {
            model: &request.model,
            max_tokens: request.max_tokens,
            system: &request.system_prompt,
            messages: [UserMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl MessagesResponse {
    /// Text of the first `text` block.
    fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
    }
}
