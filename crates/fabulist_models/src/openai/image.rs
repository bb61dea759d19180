//! Image generation client producing story illustrations.

use crate::openai::dto::{ImageRequest, ImageRequestBuilder, ImageResponse};
use crate::openai::{OpenAiConfig, build_client};
use async_trait::async_trait;
use fabulist_core::ImageSize;
use fabulist_core::prompt::render_image_prompt;
use fabulist_error::{BuilderError, FabulistResult, ImageError, ImageErrorKind};
use fabulist_interface::Illustrator;
use reqwest::Client;
use tracing::{debug, error, info, instrument};

/// Client for the OpenAI image generation endpoint.
///
/// Submits a prompt describing the illustration and returns the URL of the
/// rendered image, which the service hosts temporarily. Use
/// [`Illustrator::fetch`] to download the bytes for local persistence.
#[derive(Debug, Clone)]
pub struct OpenAiImage {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl OpenAiImage {
    /// Create a client with the default base URL and timeout.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "dall-e-3")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> FabulistResult<Self> {
        let config = OpenAiConfig {
            image_model: model.into(),
            ..Default::default()
        };
        Self::from_config(&config, api_key)
    }

    /// Create a client from connection settings, using `config.image_model`.
    pub fn from_config(config: &OpenAiConfig, api_key: impl Into<String>) -> FabulistResult<Self> {
        debug!("Creating new image generation client");
        Ok(Self {
            client: build_client(config.timeout())?,
            api_key: api_key.into(),
            api_base: config.api_base.clone(),
            model: config.image_model.clone(),
        })
    }

    /// Submit an image generation request and parse the response.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn send(&self, request: &ImageRequest) -> FabulistResult<ImageResponse> {
        let url = format!("{}/images/generations", self.api_base);
        debug!(url = %url, "Sending image generation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send image generation request");
                ImageError::new(ImageErrorKind::Request(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Image generation request failed");
            return Err(ImageError::new(ImageErrorKind::Status {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        response.json::<ImageResponse>().await.map_err(|e| {
            error!(error = ?e, "Failed to parse image generation response");
            ImageError::new(ImageErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }
}

#[async_trait]
impl Illustrator for OpenAiImage {
    #[instrument(skip(self, story, style))]
    async fn illustrate(
        &self,
        story: &str,
        style: &str,
        size: ImageSize,
    ) -> FabulistResult<String> {
        let prompt = render_image_prompt(story, style);
        let request = ImageRequestBuilder::default()
            .model(self.model.clone())
            .prompt(prompt)
            .size(size)
            .build()
            .map_err(|e| BuilderError::new(e.to_string()))?;

        let response = self.send(&request).await?;
        let datum = response
            .data()
            .first()
            .ok_or_else(|| ImageError::new(ImageErrorKind::EmptyData))?;
        let url = datum
            .url()
            .as_ref()
            .ok_or_else(|| ImageError::new(ImageErrorKind::MissingUrl))?;
        info!(model = %self.model, size = %size, "Generated illustration");
        Ok(url.clone())
    }

    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> FabulistResult<Vec<u8>> {
        debug!(url = %url, "Downloading generated image");
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = ?e, "Failed to download image");
            ImageError::new(ImageErrorKind::Download(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(status = %status, "Image download failed");
            return Err(ImageError::new(ImageErrorKind::Status {
                status_code: status.as_u16(),
                message: format!("Image download returned {}", status),
            })
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read image bytes");
            ImageError::new(ImageErrorKind::Download(format!(
                "Failed to read bytes: {}",
                e
            )))
        })?;
        info!(bytes = bytes.len(), "Downloaded illustration");
        Ok(bytes.to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
