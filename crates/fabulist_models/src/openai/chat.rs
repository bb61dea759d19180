//! Chat completion client for story generation.

use crate::openai::{
    ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, OpenAiConfig, build_client,
};
use async_trait::async_trait;
use fabulist_core::Role;
use fabulist_core::prompt::{RESPOND_PLAINLY, STORY_SYSTEM_ROLE};
use fabulist_error::{BuilderError, ChatError, ChatErrorKind, FabulistResult};
use fabulist_interface::StoryTeller;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Chat completion client.
#[derive(Debug, Clone)]
pub struct OpenAiChat {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl OpenAiChat {
    /// Create a client with the default base URL and timeout.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-4o-mini")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> FabulistResult<Self> {
        let config = OpenAiConfig {
            chat_model: model.into(),
            ..Default::default()
        };
        Self::from_config(&config, api_key)
    }

    /// Create a client from connection settings, using `config.chat_model`.
    pub fn from_config(config: &OpenAiConfig, api_key: impl Into<String>) -> FabulistResult<Self> {
        debug!("Creating new chat completion client");
        Ok(Self {
            client: build_client(config.timeout())?,
            api_key: api_key.into(),
            api_base: config.api_base.clone(),
            model: config.chat_model.clone(),
        })
    }

    /// Sends a request to the chat completions endpoint.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn send(&self, request: &ChatRequest) -> FabulistResult<ChatResponse> {
        debug!("Sending chat completion request");

        let url = format!("{}/chat/completions", self.api_base);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send chat completion request");
                ChatError::new(ChatErrorKind::Request(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat API returned error");
            return Err(ChatError::new(ChatErrorKind::Status {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat response");
            ChatError::new(ChatErrorKind::Parse(format!("Failed to parse response: {}", e)))
        })?;

        debug!(choices = chat_response.choices().len(), "Received chat response");
        Ok(chat_response)
    }
}

#[async_trait]
impl StoryTeller for OpenAiChat {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn tell(&self, prompt: &str) -> FabulistResult<String> {
        let messages = vec![
            ChatMessage::new(Role::System, STORY_SYSTEM_ROLE),
            ChatMessage::new(Role::User, format!("{}{}", prompt, RESPOND_PLAINLY)),
        ];
        let request = ChatRequestBuilder::default()
            .model(self.model.clone())
            .messages(messages)
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.send(&request).await?;
        let choice = response
            .choices()
            .first()
            .ok_or_else(|| ChatError::new(ChatErrorKind::EmptyChoices))?;
        let content = choice
            .message()
            .content()
            .as_deref()
            .ok_or_else(|| ChatError::new(ChatErrorKind::MissingContent))?;

        Ok(content.trim().to_string())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
