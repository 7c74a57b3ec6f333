//! OpenAI Chat Completions adapter.

use super::{ProviderAdapter, endpoint, send_json};
use advisor_application::GatewayError;
use advisor_domain::{OpenAiProviderConfig, ProviderId, ProviderRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAiAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiAdapter {
    pub fn new(config: &OpenAiProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &OpenAiProviderConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    async fn send(
        &self,
        credential: &str,
        request: &ProviderRequest,
    ) -> Result<String, GatewayError> {
        let url = endpoint(&self.base_url, CHAT_COMPLETIONS_PATH);
        debug!(model = %request.model, %url, "Sending OpenAI chat completion");

        let body = ChatCompletionRequest::from_request(request);
        let response: ChatCompletionResponse = send_json(
            self.client
                .post(&url)
                .bearer_auth(credential)
                .json(&body),
        )
        .await?;

        response.into_text().ok_or_else(|| {
            GatewayError::MalformedEnvelope("missing choices[0].message.content".to_string())
        })
    }
}

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_request(request: &'a ProviderRequest) -> Self {
        Self {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message?.content
    }
}
