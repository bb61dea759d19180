//! WebSocket client performing a single synthesis round per call.

use crate::edge::protocol;
use async_trait::async_trait;
use fabulist_core::Voice;
use fabulist_error::{FabulistResult, SpeechError, SpeechErrorKind};
use fabulist_interface::Narrator;
use futures_util::{SinkExt, StreamExt};
use std::path::Path;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::{self, HeaderValue};
use tokio_tungstenite::tungstenite::protocol::Message;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// User agent the service expects from an Edge browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36 Edg/130.0.0.0";

/// Narrator backed by the Edge read-aloud service.
///
/// The service is keyless. Each synthesis round opens a fresh WebSocket
/// connection, so the narrator itself holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeNarrator;

impl EdgeNarrator {
    /// Create a narrator.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Narrator for EdgeNarrator {
    #[instrument(skip(self, story, output), fields(voice = %voice))]
    async fn narrate(&self, story: &str, voice: Voice, output: &Path) -> FabulistResult<()> {
        let connection_id = Uuid::new_v4().simple().to_string();
        let url = protocol::endpoint_url(&connection_id);
        debug!(url = %url, "Connecting to speech synthesis service");

        let mut request = url.into_client_request().map_err(|e| {
            error!(error = ?e, "Failed to build WebSocket request");
            SpeechError::new(SpeechErrorKind::Connection(format!("Invalid request: {}", e)))
        })?;
        let headers = request.headers_mut();
        headers.insert(
            header::ORIGIN,
            HeaderValue::from_static(protocol::CHROME_EXTENSION_ORIGIN),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let (mut ws_stream, _) = connect_async(request).await.map_err(|e| {
            error!(error = ?e, "Failed to connect to speech synthesis service");
            SpeechError::new(SpeechErrorKind::Connection(format!("Connection failed: {}", e)))
        })?;
        info!("Connected to speech synthesis service");

        let timestamp = protocol::x_timestamp();
        let config_message = protocol::speech_config_message(&timestamp)?;
        ws_stream
            .send(Message::Text(config_message.into()))
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send speech config");
                SpeechError::new(SpeechErrorKind::Send(format!("Speech config failed: {}", e)))
            })?;

        let ssml = protocol::ssml_message(&connection_id, &timestamp, voice, story);
        ws_stream.send(Message::Text(ssml.into())).await.map_err(|e| {
            error!(error = ?e, "Failed to send SSML message");
            SpeechError::new(SpeechErrorKind::Send(format!("SSML message failed: {}", e)))
        })?;
        debug!("Sent synthesis request, collecting audio frames");

        let mut audio = Vec::new();
        let mut complete = false;
        while let Some(msg_result) = ws_stream.next().await {
            let msg = msg_result.map_err(|e| {
                error!(error = ?e, "Failed to receive message");
                SpeechError::new(SpeechErrorKind::Receive(format!("Receive failed: {}", e)))
            })?;

            match msg {
                Message::Text(text) => {
                    if protocol::is_turn_end(&text) {
                        debug!("Synthesis turn complete");
                        complete = true;
                        break;
                    }
                }
                Message::Binary(data) => {
                    if let Some(payload) = protocol::audio_payload(&data)? {
                        audio.extend_from_slice(payload);
                    }
                }
                Message::Close(frame) => {
                    warn!(frame = ?frame, "Service closed the connection");
                    break;
                }
                _ => {}
            }
        }

        if let Err(e) = ws_stream.close(None).await {
            debug!(error = ?e, "Error closing WebSocket connection");
        }

        if !complete {
            return Err(SpeechError::new(SpeechErrorKind::Closed(
                "connection ended before turn.end".to_string(),
            ))
            .into());
        }
        if audio.is_empty() {
            return Err(SpeechError::new(SpeechErrorKind::NoAudio).into());
        }

        tokio::fs::write(output, &audio).await.map_err(|e| {
            error!(path = %output.display(), error = %e, "Failed to write audio file");
            SpeechError::new(SpeechErrorKind::OutputWrite(format!(
                "{}: {}",
                output.display(),
                e
            )))
        })?;
        info!(path = %output.display(), bytes = audio.len(), "Saved narration");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "edge"
    }
}
