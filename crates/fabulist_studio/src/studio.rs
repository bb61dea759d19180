//! Generation pipeline operating on a [`Session`].
//!
//! One method per UI action. Each method takes the session by mutable
//! reference, performs the remote calls through the adapter traits, persists
//! artifacts through the store, and records the result in the session.

use crate::Session;
use derive_getters::Getters;
use fabulist_core::prompt::render_story_prompt;
use fabulist_core::{ImageSize, Stamp, Voice};
use fabulist_error::FabulistResult;
use fabulist_interface::{Illustrator, Narrator, StoryTeller};
use fabulist_storage::ArtifactStore;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Guard message shown when image or audio generation is requested before a
/// story exists.
pub const STORY_FIRST_NOTICE: &str = "Please generate a story first.";

/// Message shown when audio regeneration is skipped because nothing changed.
pub const AUDIO_UNCHANGED_NOTICE: &str =
    "No need to regenerate audio. Voice hasn't changed and story is the same.";

/// Result of a story generation round.
#[derive(Debug, Clone, Getters)]
pub struct StoryOutcome {
    /// The generated story text.
    story: String,
    /// Where the text was persisted.
    path: PathBuf,
}

/// Result of an illustration round.
#[derive(Debug, Clone)]
pub enum ImageOutcome {
    /// A new illustration was generated and saved.
    Generated {
        /// Remote locator of the rendered image.
        url: String,
        /// Local copy of the image bytes.
        path: PathBuf,
        /// Version recorded for this illustration.
        version: u32,
    },
    /// No story exists yet; nothing was generated.
    StoryMissing,
}

/// Result of a narration round.
#[derive(Debug, Clone)]
pub enum AudioOutcome {
    /// A new narration was synthesized and saved.
    Generated {
        /// Local path of the narration file.
        path: PathBuf,
        /// Version recorded for this narration.
        version: u32,
    },
    /// Voice and story are unchanged; the existing narration still applies.
    Unchanged {
        /// Path of the existing narration file.
        path: PathBuf,
    },
    /// No story exists yet; nothing was synthesized.
    StoryMissing,
}

/// Result of a full generate-all round.
#[derive(Debug, Clone, Getters)]
pub struct StorybookOutcome {
    /// The story stage result.
    story: StoryOutcome,
    /// The illustration stage result.
    image: ImageOutcome,
    /// The narration stage result.
    audio: AudioOutcome,
}

/// Coordinates the generation adapters and the artifact store.
///
/// Generic over the adapter traits so tests can substitute recording fakes
/// for the live service clients.
pub struct Studio<T: StoryTeller, I: Illustrator, N: Narrator> {
    teller: T,
    illustrator: I,
    narrator: N,
    store: ArtifactStore,
}

impl<T: StoryTeller, I: Illustrator, N: Narrator> Studio<T, I, N> {
    /// Create a studio from its adapters and store.
    pub fn new(teller: T, illustrator: I, narrator: N, store: ArtifactStore) -> Self {
        Self {
            teller,
            illustrator,
            narrator,
            store,
        }
    }

    /// The artifact store backing this studio.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Generate a story from the rendered template and install it in the
    /// session.
    ///
    /// Assigns a fresh [`Stamp`], persists the text, and resets both version
    /// counters. Always runnable.
    #[instrument(skip(self, session, template, idea))]
    pub async fn generate_story(
        &self,
        session: &mut Session,
        template: &str,
        idea: &str,
    ) -> FabulistResult<StoryOutcome> {
        let prompt = render_story_prompt(template, idea);
        info!(
            provider = self.teller.provider_name(),
            model = self.teller.model_name(),
            "Generating story"
        );
        let story = self.teller.tell(&prompt).await?;
        let stamp = Stamp::now();
        let path = self.store.save_story(&stamp, &story).await?;
        session.begin_story(story.clone(), stamp);
        info!(path = %path.display(), "Story installed in session");
        Ok(StoryOutcome { story, path })
    }

    /// Generate an illustration for the current story.
    ///
    /// Guarded: without a story this reports [`ImageOutcome::StoryMissing`]
    /// and performs no remote call, no state mutation, and no file write.
    #[instrument(skip(self, session, style), fields(size = %size))]
    pub async fn generate_image(
        &self,
        session: &mut Session,
        style: &str,
        size: ImageSize,
    ) -> FabulistResult<ImageOutcome> {
        let (story, stamp) = match (session.story(), session.stamp()) {
            (Some(story), Some(stamp)) => (story.clone(), stamp.clone()),
            _ => {
                info!("No story yet, skipping illustration");
                return Ok(ImageOutcome::StoryMissing);
            }
        };

        info!(
            provider = self.illustrator.provider_name(),
            model = self.illustrator.model_name(),
            "Generating illustration"
        );
        let url = self.illustrator.illustrate(&story, style, size).await?;
        let bytes = self.illustrator.fetch(&url).await?;

        // First illustration for a story keeps the counter at 1; each
        // regeneration bumps it.
        let version = if *session.image_generated() {
            session.image_version() + 1
        } else {
            *session.image_version()
        };
        let path = self.store.save_image(&stamp, version, &bytes).await?;
        session.record_image(url.clone(), version);
        info!(path = %path.display(), version, "Illustration saved");
        Ok(ImageOutcome::Generated { url, path, version })
    }

    /// Synthesize narration for the current story, replacing any previous
    /// file.
    ///
    /// Guarded on story presence. The previous narration file, including one
    /// left over from an earlier story, is deleted before synthesis so at
    /// most one narration is live per session.
    #[instrument(skip(self, session), fields(voice = %voice))]
    pub async fn generate_audio(
        &self,
        session: &mut Session,
        voice: Voice,
    ) -> FabulistResult<AudioOutcome> {
        let (story, stamp) = match (session.story(), session.stamp()) {
            (Some(story), Some(stamp)) => (story.clone(), stamp.clone()),
            _ => {
                info!("No story yet, skipping narration");
                return Ok(AudioOutcome::StoryMissing);
            }
        };

        if let Some(previous) = session.audio_file().clone() {
            self.store.remove_audio(&previous).await?;
            session.clear_audio();
        }

        let version = if *session.audio_generated() {
            session.audio_version() + 1
        } else {
            *session.audio_version()
        };
        info!(provider = self.narrator.provider_name(), "Synthesizing narration");
        let path = self.store.audio_path(&stamp, voice).await?;
        self.narrator.narrate(&story, voice, &path).await?;
        session.record_audio(path.clone(), voice, story, version);
        info!(path = %path.display(), version, "Narration saved");
        Ok(AudioOutcome::Generated { path, version })
    }

    /// Synthesize narration only if the voice or story changed.
    ///
    /// Mirrors the audio button: an unchanged voice and story with a live
    /// narration short-circuit without a synthesis call.
    #[instrument(skip(self, session), fields(voice = %voice))]
    pub async fn regenerate_audio(
        &self,
        session: &mut Session,
        voice: Voice,
    ) -> FabulistResult<AudioOutcome> {
        let story = match session.story() {
            Some(story) => story.clone(),
            None => {
                info!("No story yet, skipping narration");
                return Ok(AudioOutcome::StoryMissing);
            }
        };

        let voice_changed = *session.last_voice() != Some(voice);
        let story_changed = session.last_story().as_deref() != Some(story.as_str());
        match session.audio_file().clone() {
            Some(path) if !voice_changed && !story_changed => {
                info!("Voice and story unchanged, keeping existing narration");
                Ok(AudioOutcome::Unchanged { path })
            }
            _ => self.generate_audio(session, voice).await,
        }
    }

    /// Run the full pipeline: story, then illustration, then narration.
    ///
    /// A failure at any stage aborts the remainder, leaving whatever the
    /// earlier stages already recorded in the session.
    #[instrument(skip(self, session, template, idea, style), fields(size = %size, voice = %voice))]
    pub async fn generate_all(
        &self,
        session: &mut Session,
        template: &str,
        idea: &str,
        style: &str,
        size: ImageSize,
        voice: Voice,
    ) -> FabulistResult<StorybookOutcome> {
        let story = self.generate_story(session, template, idea).await?;
        let image = self.generate_image(session, style, size).await?;
        let audio = self.generate_audio(session, voice).await?;
        Ok(StorybookOutcome {
            story,
            image,
            audio,
        })
    }
}
