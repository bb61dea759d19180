// Pipeline behavior tests using recording fakes in place of the live
// service clients.

mod test_utils;

use fabulist_core::prompt::{DEFAULT_IMAGE_STYLE, DEFAULT_STORY_TEMPLATE};
use fabulist_core::{ImageSize, Voice};
use fabulist_storage::ArtifactStore;
use fabulist_studio::{AudioOutcome, ImageOutcome, Session, Studio};
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;
use test_utils::{MockIllustrator, MockNarrator, MockTeller};

fn test_studio(
    root: &Path,
) -> (
    Studio<MockTeller, MockIllustrator, MockNarrator>,
    MockTeller,
    MockIllustrator,
    MockNarrator,
) {
    let teller = MockTeller::new_success("A sleepy fox naps in a box.");
    let illustrator = MockIllustrator::new_success("https://images.example/fox.png");
    let narrator = MockNarrator::new();
    let studio = Studio::new(
        teller.clone(),
        illustrator.clone(),
        narrator.clone(),
        ArtifactStore::new(root),
    );
    (studio, teller, illustrator, narrator)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap()
}

#[tokio::test]
async fn full_flow_keeps_versions_at_one() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (studio, teller, illustrator, narrator) = test_studio(dir.path());
    let mut session = Session::new();

    let story = studio
        .generate_story(
            &mut session,
            DEFAULT_STORY_TEMPLATE,
            "a lost puppy finds its way home",
        )
        .await?;
    assert!(!story.story().is_empty());
    assert!(story.path().exists());

    let image = studio
        .generate_image(&mut session, DEFAULT_IMAGE_STYLE, ImageSize::Square)
        .await?;
    match &image {
        ImageOutcome::Generated { path, version, url } => {
            assert_eq!(*version, 1);
            assert!(path.exists());
            assert!(file_name(path).ends_with("-v1.png"));
            assert_eq!(url, "https://images.example/fox.png");
        }
        ImageOutcome::StoryMissing => panic!("expected a generated image"),
    }

    let audio = studio.generate_audio(&mut session, Voice::Ana).await?;
    match &audio {
        AudioOutcome::Generated { path, version } => {
            assert_eq!(*version, 1);
            assert!(path.exists());
            assert!(file_name(path).ends_with("-en-US-AnaNeural.mp3"));
        }
        _ => panic!("expected a generated narration"),
    }

    assert_eq!(*session.image_version(), 1);
    assert_eq!(*session.audio_version(), 1);
    assert_eq!(teller.call_count(), 1);
    assert_eq!(illustrator.call_count(), 1);
    assert_eq!(narrator.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn image_regeneration_bumps_version_and_keeps_old_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (studio, _teller, illustrator, _narrator) = test_studio(dir.path());
    let mut session = Session::new();

    studio
        .generate_story(&mut session, DEFAULT_STORY_TEMPLATE, "a red balloon")
        .await?;

    let mut paths = Vec::new();
    for expected in 1..=3u32 {
        let outcome = studio
            .generate_image(&mut session, DEFAULT_IMAGE_STYLE, ImageSize::Square)
            .await?;
        match outcome {
            ImageOutcome::Generated { path, version, .. } => {
                assert_eq!(version, expected);
                paths.push(path);
            }
            ImageOutcome::StoryMissing => panic!("expected a generated image"),
        }
    }

    assert_eq!(*session.image_version(), 3);
    assert_eq!(illustrator.call_count(), 3);
    for path in &paths {
        assert!(path.exists(), "old version missing: {}", path.display());
    }
    assert_eq!(paths.iter().collect::<HashSet<_>>().len(), 3);
    Ok(())
}

#[tokio::test]
async fn audio_regeneration_short_circuits_when_unchanged() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (studio, _teller, _illustrator, narrator) = test_studio(dir.path());
    let mut session = Session::new();

    studio
        .generate_story(&mut session, DEFAULT_STORY_TEMPLATE, "a quiet pond")
        .await?;
    studio.generate_audio(&mut session, Voice::Ana).await?;

    let outcome = studio.regenerate_audio(&mut session, Voice::Ana).await?;
    match outcome {
        AudioOutcome::Unchanged { path } => assert!(path.exists()),
        _ => panic!("expected the short-circuit"),
    }
    assert_eq!(narrator.call_count(), 1);
    assert_eq!(*session.audio_version(), 1);
    Ok(())
}

#[tokio::test]
async fn voice_change_replaces_narration_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (studio, _teller, _illustrator, narrator) = test_studio(dir.path());
    let mut session = Session::new();

    studio
        .generate_story(&mut session, DEFAULT_STORY_TEMPLATE, "a brave kite")
        .await?;
    let first = match studio.generate_audio(&mut session, Voice::Ana).await? {
        AudioOutcome::Generated { path, .. } => path,
        _ => panic!("expected a generated narration"),
    };
    assert!(first.exists());

    let second = match studio.regenerate_audio(&mut session, Voice::Jenny).await? {
        AudioOutcome::Generated { path, version } => {
            assert_eq!(version, 2);
            path
        }
        _ => panic!("expected a regenerated narration"),
    };

    assert!(!first.exists(), "previous narration should be deleted");
    assert!(second.exists());
    assert!(file_name(&second).ends_with("-en-US-JennyNeural.mp3"));
    assert_eq!(narrator.call_count(), 2);
    assert_eq!(*session.audio_version(), 2);
    Ok(())
}

#[tokio::test]
async fn new_story_resets_versions_and_replaces_stale_narration() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let teller = MockTeller::new_sequence(&["The fox naps.", "The owl flies."]);
    let narrator = MockNarrator::new();
    let studio = Studio::new(
        teller.clone(),
        MockIllustrator::new_success("https://images.example/owl.png"),
        narrator.clone(),
        ArtifactStore::new(dir.path()),
    );
    let mut session = Session::new();

    studio
        .generate_story(&mut session, DEFAULT_STORY_TEMPLATE, "first idea")
        .await?;
    studio
        .generate_image(&mut session, DEFAULT_IMAGE_STYLE, ImageSize::Square)
        .await?;
    studio
        .generate_image(&mut session, DEFAULT_IMAGE_STYLE, ImageSize::Square)
        .await?;
    let stale = match studio.generate_audio(&mut session, Voice::Ana).await? {
        AudioOutcome::Generated { path, .. } => path,
        _ => panic!("expected a generated narration"),
    };
    assert_eq!(*session.image_version(), 2);

    studio
        .generate_story(&mut session, DEFAULT_STORY_TEMPLATE, "second idea")
        .await?;
    assert_eq!(*session.image_version(), 1);
    assert_eq!(*session.audio_version(), 1);
    // Artifacts of the first story stay referenced until regenerated.
    assert!(session.image_url().is_some());
    assert_eq!(session.audio_file().as_deref(), Some(stale.as_path()));

    // Same voice, new story text: regeneration replaces the stale file.
    let fresh = match studio.regenerate_audio(&mut session, Voice::Ana).await? {
        AudioOutcome::Generated { path, version } => {
            assert_eq!(version, 1);
            path
        }
        _ => panic!("expected a regenerated narration"),
    };
    assert!(!stale.exists());
    assert!(fresh.exists());
    assert_ne!(stale, fresh);
    assert_eq!(narrator.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn guards_block_generation_without_story() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (studio, teller, illustrator, narrator) = test_studio(dir.path());
    let mut session = Session::new();

    let image = studio
        .generate_image(&mut session, DEFAULT_IMAGE_STYLE, ImageSize::Square)
        .await?;
    assert!(matches!(image, ImageOutcome::StoryMissing));
    let audio = studio.generate_audio(&mut session, Voice::Ana).await?;
    assert!(matches!(audio, AudioOutcome::StoryMissing));
    let regen = studio.regenerate_audio(&mut session, Voice::Ana).await?;
    assert!(matches!(regen, AudioOutcome::StoryMissing));

    assert_eq!(teller.call_count(), 0);
    assert_eq!(illustrator.call_count(), 0);
    assert_eq!(narrator.call_count(), 0);
    assert!(session.image_url().is_none());
    assert!(session.audio_file().is_none());
    assert_eq!(*session.image_version(), 1);
    assert_eq!(*session.audio_version(), 1);
    // Nothing was written under the storage root.
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn story_failure_leaves_session_untouched() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let teller = MockTeller::new_error();
    let studio = Studio::new(
        teller.clone(),
        MockIllustrator::new_success("https://images.example/x.png"),
        MockNarrator::new(),
        ArtifactStore::new(dir.path()),
    );
    let mut session = Session::new();

    let result = studio
        .generate_story(&mut session, DEFAULT_STORY_TEMPLATE, "an idea")
        .await;
    assert!(result.is_err());
    assert!(session.story().is_none());
    assert!(session.stamp().is_none());
    assert_eq!(teller.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn generate_all_produces_story_image_and_narration() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (studio, _teller, _illustrator, _narrator) = test_studio(dir.path());
    let mut session = Session::new();

    let outcome = studio
        .generate_all(
            &mut session,
            DEFAULT_STORY_TEMPLATE,
            "a lost puppy finds its way home",
            DEFAULT_IMAGE_STYLE,
            ImageSize::Square,
            Voice::Ana,
        )
        .await?;

    assert!(!outcome.story().story().is_empty());
    assert!(matches!(
        outcome.image(),
        ImageOutcome::Generated { version: 1, .. }
    ));
    match outcome.audio() {
        AudioOutcome::Generated { path, version } => {
            assert_eq!(*version, 1);
            let name = file_name(path);
            assert!(name.starts_with("audio-"));
            assert!(name.ends_with("-en-US-AnaNeural.mp3"));
        }
        _ => panic!("expected a generated narration"),
    }
    assert_eq!(*session.image_version(), 1);
    assert_eq!(*session.audio_version(), 1);
    Ok(())
}
