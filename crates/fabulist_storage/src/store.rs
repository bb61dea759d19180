//! Filesystem artifact store.

use fabulist_core::{Stamp, Voice};
use fabulist_error::{FabulistResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

const TEXTS_DIR: &str = "texts";
const IMAGES_DIR: &str = "images";
const AUDIOS_DIR: &str = "audios";

/// Filesystem store for story, image, and audio artifacts.
///
/// Directories are created on demand; story and image writes go through a
/// temp file + rename so a crash cannot leave a partial artifact under its
/// final name.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directory.
    ///
    /// No filesystem access happens until the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save a story text, returning the written path.
    #[tracing::instrument(skip(self, story), fields(stamp = %stamp, len = story.len()))]
    pub async fn save_story(&self, stamp: &Stamp, story: &str) -> FabulistResult<PathBuf> {
        let dir = self.ensure_dir(TEXTS_DIR).await?;
        let path = dir.join(format!("story-{}.txt", stamp));
        self.write_atomic(&path, story.as_bytes()).await?;

        tracing::info!(path = %path.display(), "Saved story");
        Ok(path)
    }

    /// Save image bytes under the given version, returning the written path.
    #[tracing::instrument(skip(self, data), fields(stamp = %stamp, version, size = data.len()))]
    pub async fn save_image(
        &self,
        stamp: &Stamp,
        version: u32,
        data: &[u8],
    ) -> FabulistResult<PathBuf> {
        let dir = self.ensure_dir(IMAGES_DIR).await?;
        let path = dir.join(format!("image-{}-v{}.png", stamp, version));
        self.write_atomic(&path, data).await?;

        tracing::info!(path = %path.display(), "Saved image");
        Ok(path)
    }

    /// Allocate the audio output path for a stamp and voice.
    ///
    /// Creates the audio directory so the narrator can write to the returned
    /// path directly.
    #[tracing::instrument(skip(self), fields(stamp = %stamp, voice = %voice))]
    pub async fn audio_path(&self, stamp: &Stamp, voice: Voice) -> FabulistResult<PathBuf> {
        let dir = self.ensure_dir(AUDIOS_DIR).await?;
        Ok(dir.join(format!("audio-{}-{}.mp3", stamp, voice)))
    }

    /// Remove a previously written audio file.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn remove_audio(&self, path: &Path) -> FabulistResult<()> {
        tokio::fs::remove_file(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRemove(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::info!("Removed audio file");
        Ok(())
    }

    /// Resolve a relative artifact reference like `audios/audio-x.mp3` to a
    /// path under the root.
    ///
    /// Returns `None` for anything that is not exactly one known artifact
    /// directory plus a bare filename, so request paths cannot escape the
    /// root.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let mut parts = relative.split('/');
        let dir = parts.next()?;
        let file = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        if !matches!(dir, TEXTS_DIR | IMAGES_DIR | AUDIOS_DIR) {
            return None;
        }
        if file.is_empty() || file == "." || file == ".." || file.contains('\\') {
            return None;
        }
        Some(self.root.join(dir).join(file))
    }

    async fn ensure_dir(&self, name: &str) -> FabulistResult<PathBuf> {
        let dir = self.root.join(name);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;
        Ok(dir)
    }

    async fn write_atomic(&self, path: &Path, data: &[u8]) -> FabulistResult<()> {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        Ok(())
    }
}
