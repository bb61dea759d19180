//! Per-session generation state.

use derive_getters::Getters;
use fabulist_core::{Stamp, Voice};
use std::path::PathBuf;

/// State for one user's story-building session.
///
/// Holds the live story text and references to the artifacts generated for
/// it, along with the bookkeeping needed to decide whether regeneration is
/// necessary. Handlers mutate a session through the intent methods below;
/// rendering reads it through the getters.
///
/// Artifacts from a previous story are deliberately left referenced when a
/// new story is generated. They stay visible until the user regenerates the
/// corresponding artifact.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Current story text, if one has been generated.
    story: Option<String>,
    /// Grouping key naming the artifact files of the current story.
    stamp: Option<Stamp>,
    /// Remote locator of the most recent illustration.
    image_url: Option<String>,
    /// Local path of the live narration file.
    audio_file: Option<PathBuf>,
    /// Voice used for the live narration.
    last_voice: Option<Voice>,
    /// Story text the live narration was synthesized from.
    last_story: Option<String>,
    /// Version of the live illustration for the current story.
    image_version: u32,
    /// Version of the live narration for the current story.
    audio_version: u32,
    /// Whether an illustration has been produced for the current story.
    image_generated: bool,
    /// Whether a narration has been produced for the current story.
    audio_generated: bool,
}

impl Session {
    /// Create an empty session with version counters at 1.
    pub fn new() -> Self {
        Self {
            story: None,
            stamp: None,
            image_url: None,
            audio_file: None,
            last_voice: None,
            last_story: None,
            image_version: 1,
            audio_version: 1,
            image_generated: false,
            audio_generated: false,
        }
    }

    /// Install a freshly generated story.
    ///
    /// Resets both version counters to 1 and clears the per-story flags.
    /// Artifact references from a previous story are left in place.
    pub fn begin_story(&mut self, story: String, stamp: Stamp) {
        self.story = Some(story);
        self.stamp = Some(stamp);
        self.image_version = 1;
        self.audio_version = 1;
        self.image_generated = false;
        self.audio_generated = false;
    }

    /// Record a generated illustration and its version.
    pub fn record_image(&mut self, url: String, version: u32) {
        self.image_url = Some(url);
        self.image_version = version;
        self.image_generated = true;
    }

    /// Record a synthesized narration along with the inputs that produced it.
    pub fn record_audio(&mut self, path: PathBuf, voice: Voice, story: String, version: u32) {
        self.audio_file = Some(path);
        self.last_voice = Some(voice);
        self.last_story = Some(story);
        self.audio_version = version;
        self.audio_generated = true;
    }

    /// Drop the reference to the live narration file.
    ///
    /// Called after the file has been deleted so the session never points at
    /// a path that no longer exists.
    pub fn clear_audio(&mut self) {
        self.audio_file = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty_with_unit_versions() {
        let session = Session::new();
        assert!(session.story().is_none());
        assert!(session.stamp().is_none());
        assert!(session.image_url().is_none());
        assert!(session.audio_file().is_none());
        assert_eq!(*session.image_version(), 1);
        assert_eq!(*session.audio_version(), 1);
        assert!(!session.image_generated());
        assert!(!session.audio_generated());
    }

    #[test]
    fn begin_story_resets_versions_but_keeps_artifacts() {
        let mut session = Session::new();
        session.record_image("https://example.com/a.png".to_string(), 3);
        session.record_audio(
            PathBuf::from("audios/a.mp3"),
            Voice::Ana,
            "old story".to_string(),
            2,
        );

        session.begin_story("new story".to_string(), Stamp::now());

        assert_eq!(session.story().as_deref(), Some("new story"));
        assert_eq!(*session.image_version(), 1);
        assert_eq!(*session.audio_version(), 1);
        assert!(!session.image_generated());
        assert!(!session.audio_generated());
        // Stale references survive until the artifacts are regenerated.
        assert!(session.image_url().is_some());
        assert!(session.audio_file().is_some());
        assert!(session.last_voice().is_some());
        assert_eq!(session.last_story().as_deref(), Some("old story"));
    }

    #[test]
    fn record_audio_tracks_regeneration_inputs() {
        let mut session = Session::new();
        session.begin_story("story".to_string(), Stamp::now());
        session.record_audio(
            PathBuf::from("audios/b.mp3"),
            Voice::Jenny,
            "story".to_string(),
            1,
        );

        assert_eq!(*session.last_voice(), Some(Voice::Jenny));
        assert_eq!(session.last_story().as_deref(), Some("story"));
        assert_eq!(*session.audio_version(), 1);
        assert!(session.audio_generated());

        session.clear_audio();
        assert!(session.audio_file().is_none());
        // The regeneration bookkeeping is separate from the live file.
        assert_eq!(*session.last_voice(), Some(Voice::Jenny));
    }
}
