//! Assembly of a studio from the live service clients.

use crate::Studio;
use fabulist_error::FabulistResult;
use fabulist_models::{EdgeNarrator, OpenAiChat, OpenAiConfig, OpenAiImage};
use fabulist_storage::ArtifactStore;
use std::path::PathBuf;

/// A studio backed by the live OpenAI and Edge clients.
pub type LiveStudio = Studio<OpenAiChat, OpenAiImage, EdgeNarrator>;

/// Assemble a studio talking to the live services.
///
/// # Arguments
///
/// * `config` - OpenAI connection settings
/// * `storage_root` - Directory the artifact folders are created under
/// * `api_key` - OpenAI API key
///
/// # Examples
///
/// ```rust,ignore
/// use fabulist_models::OpenAiConfig;
/// use fabulist_studio::live_studio;
///
/// let studio = live_studio(&OpenAiConfig::default(), ".", &api_key)?;
/// ```
pub fn live_studio(
    config: &OpenAiConfig,
    storage_root: impl Into<PathBuf>,
    api_key: &str,
) -> FabulistResult<LiveStudio> {
    let teller = OpenAiChat::from_config(config, api_key)?;
    let illustrator = OpenAiImage::from_config(config, api_key)?;
    let narrator = EdgeNarrator::new();
    Ok(Studio::new(
        teller,
        illustrator,
        narrator,
        ArtifactStore::new(storage_root),
    ))
}
