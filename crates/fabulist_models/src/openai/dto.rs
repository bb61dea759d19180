//! Request and response types for the OpenAI API.

use fabulist_core::{ImageSize, Role};
use serde::{Deserialize, Serialize};

/// Sampling temperature for story generation.
pub const STORY_TEMPERATURE: f64 = 0.8;

/// Quality level requested for every image generation.
pub const STANDARD_QUALITY: &str = "standard";

/// One message in a chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
pub struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    /// Create a message with the wire form of the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        let role = match role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model id
    model: String,
    /// Conversation messages, system first
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default = "STORY_TEMPERATURE")]
    temperature: f64,
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ChatChoice {
    message: ChoiceMessage,
}

/// The message of a completion choice.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Image generation request body.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Model id
    model: String,
    /// Full generation prompt (story plus style)
    prompt: String,
    /// Number of images requested
    #[builder(default = "1")]
    n: u8,
    /// Output size
    size: ImageSize,
    /// Output quality
    #[builder(default = "STANDARD_QUALITY.to_string()")]
    quality: String,
}

/// Image generation response body.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ImageResponse {
    data: Vec<ImageDatum>,
}

/// One generated image.
#[derive(Debug, Clone, Deserialize, derive_getters::Getters)]
pub struct ImageDatum {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    revised_prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_wire_shape() {
        let request = ChatRequestBuilder::default()
            .model("gpt-4o-mini")
            .messages(vec![
                ChatMessage::new(Role::System, "You are a children's story writer."),
                ChatMessage::new(Role::User, "Tell a story."),
            ])
            .build()
            .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["temperature"], 0.8);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "Tell a story.");
    }

    #[test]
    fn image_request_wire_shape() {
        let request = ImageRequestBuilder::default()
            .model("dall-e-3")
            .prompt("A dog naps in the sun.")
            .size(ImageSize::Square)
            .build()
            .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "dall-e-3");
        assert_eq!(value["n"], 1);
        assert_eq!(value["size"], "1024x1024");
        assert_eq!(value["quality"], "standard");
    }

    #[test]
    fn chat_response_tolerates_missing_content() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert!(response.choices()[0].message().content().is_none());
    }

    #[test]
    fn image_response_reads_url() {
        let response: ImageResponse = serde_json::from_str(
            r#"{"data": [{"url": "https://img.example/cat.png", "revised_prompt": "A cat."}]}"#,
        )
        .unwrap();
        let datum = &response.data()[0];
        assert_eq!(datum.url().as_deref(), Some("https://img.example/cat.png"));
        assert_eq!(datum.revised_prompt().as_deref(), Some("A cat."));
    }
}
