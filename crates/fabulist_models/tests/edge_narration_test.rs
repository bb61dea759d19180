use fabulist_core::Voice;
use fabulist_interface::Narrator;
use fabulist_models::EdgeNarrator;
use tempfile::TempDir;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_edge_narration_writes_audio() -> Result<(), Box<dyn std::error::Error>> {
    let narrator = EdgeNarrator::new();
    let dir = TempDir::new()?;
    let output = dir.path().join("narration.mp3");

    narrator
        .narrate(
            "The little boat rocks, back and forth it goes.",
            Voice::Ana,
            &output,
        )
        .await?;

    let bytes = tokio::fs::read(&output).await?;
    assert!(!bytes.is_empty(), "Should write non-empty audio");
    println!("Wrote {} bytes of audio", bytes.len());

    Ok(())
}
