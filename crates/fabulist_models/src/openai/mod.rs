//! OpenAI API client implementations.
//!
//! This module provides the two REST clients the studio orchestrates:
//! - [`OpenAiChat`] - chat completions for story text
//! - [`OpenAiImage`] - image generations plus download of the result
//!
//! Both share one [`OpenAiConfig`], are built with a request timeout, and
//! propagate failures without retrying.

use fabulist_error::{FabulistResult, HttpError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod chat;
mod dto;
mod image;

pub use chat::OpenAiChat;
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChoiceMessage,
    ImageDatum, ImageRequest, ImageRequestBuilder, ImageResponse, STANDARD_QUALITY,
    STORY_TEMPERATURE,
};
pub use image::OpenAiImage;

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default chat completion model.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Default image generation model.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings shared by the OpenAI clients.
///
/// All fields have defaults, so a partial `[openai]` config section works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Chat completion model id
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Image generation model id
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            chat_model: default_chat_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub(crate) fn build_client(timeout: Duration) -> FabulistResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: OpenAiConfig = serde_json::from_str(r#"{"chat_model": "gpt-4o"}"#).unwrap();
        assert_eq!(config.chat_model, "gpt-4o");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }
}
