//! Seam traits for the three generative services.

use async_trait::async_trait;
use fabulist_core::{ImageSize, Voice};
use fabulist_error::FabulistResult;
use std::path::Path;

/// Story text generation over a chat completion service.
#[async_trait]
pub trait StoryTeller: Send + Sync {
    /// Generate a story from a fully rendered prompt.
    ///
    /// Returns the trimmed completion text.
    async fn tell(&self, prompt: &str) -> FabulistResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Illustration generation over an image service.
#[async_trait]
pub trait Illustrator: Send + Sync {
    /// Generate one illustration for the story in the given size.
    ///
    /// The implementation combines the story text with the style text into a
    /// single generation prompt. Returns the remote locator of the image.
    async fn illustrate(&self, story: &str, style: &str, size: ImageSize)
    -> FabulistResult<String>;

    /// Download the generated image bytes from its locator.
    async fn fetch(&self, url: &str) -> FabulistResult<Vec<u8>>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "dall-e-3").
    fn model_name(&self) -> &str;
}

/// Narration over a speech synthesis service.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Synthesize the story in the given voice, writing the audio to `output`.
    ///
    /// Suspends until synthesis completes and the file is on disk.
    async fn narrate(&self, story: &str, voice: Voice, output: &Path) -> FabulistResult<()>;

    /// Provider name (e.g., "edge").
    fn provider_name(&self) -> &'static str;
}
