//! Wire format helpers for the Edge TTS WebSocket protocol.
//!
//! Messages on the socket are either text frames carrying colon-separated
//! headers, a blank line, and a body, or binary frames whose first two bytes
//! give the big-endian length of an embedded header block. Audio bytes follow
//! the header block in frames whose headers carry `Path:audio`.

use chrono::Utc;
use fabulist_core::Voice;
use fabulist_error::{FabulistResult, JsonError, SpeechError, SpeechErrorKind};
use serde::Serialize;

/// WebSocket endpoint of the Edge read-aloud service.
pub(crate) const SPEECH_ENDPOINT: &str =
    "wss://speech.platform.bing.com/consumer/speech/synthesize/readaloud/edge/v1";

/// Access token the Edge browser presents to the free tier.
pub(crate) const TRUSTED_CLIENT_TOKEN: &str = "6A5AA1D4EAFF4E9FB37E23D68491D6F4";

/// Origin the service expects, matching the Edge read-aloud extension.
pub(crate) const CHROME_EXTENSION_ORIGIN: &str =
    "chrome-extension://jdiccldimpdaibmpdkjnbmckianbfold";

const OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";
const AUDIO_PATH_HEADER: &str = "Path:audio";
const TURN_END_HEADER: &str = "Path:turn.end";

/// Full connection URL with the token and a per-round connection id.
pub(crate) fn endpoint_url(connection_id: &str) -> String {
    format!(
        "{}?TrustedClientToken={}&ConnectionId={}",
        SPEECH_ENDPOINT, TRUSTED_CLIENT_TOKEN, connection_id
    )
}

/// Timestamp value for the `X-Timestamp` message header.
pub(crate) fn x_timestamp() -> String {
    Utc::now()
        .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
        .to_string()
}

#[derive(Debug, Serialize)]
struct MetadataOptions {
    #[serde(rename = "sentenceBoundaryEnabled")]
    sentence_boundary_enabled: &'static str,
    #[serde(rename = "wordBoundaryEnabled")]
    word_boundary_enabled: &'static str,
}

#[derive(Debug, Serialize)]
struct AudioSettings {
    metadataoptions: MetadataOptions,
    #[serde(rename = "outputFormat")]
    output_format: &'static str,
}

#[derive(Debug, Serialize)]
struct Synthesis {
    audio: AudioSettings,
}

#[derive(Debug, Serialize)]
struct SynthesisContext {
    synthesis: Synthesis,
}

#[derive(Debug, Serialize)]
struct SpeechConfig {
    context: SynthesisContext,
}

impl SpeechConfig {
    fn mp3_mono() -> Self {
        Self {
            context: SynthesisContext {
                synthesis: Synthesis {
                    audio: AudioSettings {
                        metadataoptions: MetadataOptions {
                            sentence_boundary_enabled: "false",
                            word_boundary_enabled: "true",
                        },
                        output_format: OUTPUT_FORMAT,
                    },
                },
            },
        }
    }
}

/// Build the `speech.config` text message selecting the output format.
pub(crate) fn speech_config_message(timestamp: &str) -> FabulistResult<String> {
    let body = serde_json::to_string(&SpeechConfig::mp3_mono())
        .map_err(|e| JsonError::new(format!("Failed to serialize speech config: {}", e)))?;
    Ok(format!(
        "X-Timestamp:{}\r\nContent-Type:application/json; charset=utf-8\r\nPath:speech.config\r\n\r\n{}",
        timestamp, body
    ))
}

/// Build the SSML text message carrying the voice and escaped story text.
pub(crate) fn ssml_message(request_id: &str, timestamp: &str, voice: Voice, text: &str) -> String {
    let ssml = format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='en-US'>\
         <voice name='{}'><prosody pitch='+0Hz' rate='+0%' volume='+0%'>{}</prosody></voice></speak>",
        voice,
        escape_xml(text)
    );
    format!(
        "X-RequestId:{}\r\nContent-Type:application/ssml+xml\r\nX-Timestamp:{}Z\r\nPath:ssml\r\n\r\n{}",
        request_id, timestamp, ssml
    )
}

/// Extract the audio payload from a binary frame.
///
/// Returns `Ok(None)` for well-formed binary frames whose header block does
/// not carry `Path:audio`; those are metadata the caller should skip.
pub(crate) fn audio_payload(frame: &[u8]) -> FabulistResult<Option<&[u8]>> {
    if frame.len() < 2 {
        return Err(SpeechError::new(SpeechErrorKind::InvalidFrame(format!(
            "binary frame too short: {} bytes",
            frame.len()
        )))
        .into());
    }
    let header_len = u16::from_be_bytes([frame[0], frame[1]]) as usize;
    if frame.len() < 2 + header_len {
        return Err(SpeechError::new(SpeechErrorKind::InvalidFrame(format!(
            "header length {} exceeds frame of {} bytes",
            header_len,
            frame.len()
        )))
        .into());
    }
    let header = std::str::from_utf8(&frame[2..2 + header_len]).map_err(|e| {
        SpeechError::new(SpeechErrorKind::InvalidFrame(format!(
            "header block is not valid UTF-8: {}",
            e
        )))
    })?;
    if header.contains(AUDIO_PATH_HEADER) {
        Ok(Some(&frame[2 + header_len..]))
    } else {
        Ok(None)
    }
}

/// Whether a text frame signals the end of the synthesis turn.
pub(crate) fn is_turn_end(text: &str) -> bool {
    text.contains(TURN_END_HEADER)
}

/// Escape text for embedding in SSML. Ampersands must go first.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabulist_error::FabulistErrorKind;

    #[test]
    fn endpoint_url_includes_token_and_connection_id() {
        let url = endpoint_url("deadbeef");
        assert!(url.starts_with("wss://speech.platform.bing.com/"));
        assert!(url.contains("TrustedClientToken=6A5AA1D4EAFF4E9FB37E23D68491D6F4"));
        assert!(url.ends_with("ConnectionId=deadbeef"));
    }

    #[test]
    fn x_timestamp_is_gmt_formatted() {
        let ts = x_timestamp();
        assert!(ts.ends_with("GMT+0000 (Coordinated Universal Time)"));
    }

    #[test]
    fn speech_config_selects_mp3_output() {
        let message = speech_config_message("ts").unwrap();
        let (headers, body) = message.split_once("\r\n\r\n").unwrap();
        assert!(headers.contains("X-Timestamp:ts"));
        assert!(headers.contains("Content-Type:application/json; charset=utf-8"));
        assert!(headers.contains("Path:speech.config"));
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            value["context"]["synthesis"]["audio"]["outputFormat"],
            "audio-24khz-48kbitrate-mono-mp3"
        );
        assert_eq!(
            value["context"]["synthesis"]["audio"]["metadataoptions"]["wordBoundaryEnabled"],
            "true"
        );
    }

    #[test]
    fn ssml_message_carries_voice_and_escaped_text() {
        let message = ssml_message("abc123", "ts", Voice::Jenny, "Tom & Jerry <nap>");
        assert!(message.contains("X-RequestId:abc123"));
        assert!(message.contains("X-Timestamp:tsZ"));
        assert!(message.contains("Path:ssml"));
        assert!(message.contains("<voice name='en-US-JennyNeural'>"));
        assert!(message.contains("Tom &amp; Jerry &lt;nap&gt;"));
        assert!(!message.contains("<nap>"));
    }

    #[test]
    fn audio_frames_split_on_header_length() {
        let header = b"X-RequestId:1\r\nPath:audio\r\n";
        let mut frame = (header.len() as u16).to_be_bytes().to_vec();
        frame.extend_from_slice(header);
        frame.extend_from_slice(&[1, 2, 3, 4]);
        let payload = audio_payload(&frame).unwrap();
        assert_eq!(payload, Some(&[1u8, 2, 3, 4][..]));
    }

    #[test]
    fn non_audio_binary_frames_are_skipped() {
        let header = b"Path:metadata\r\n";
        let mut frame = (header.len() as u16).to_be_bytes().to_vec();
        frame.extend_from_slice(header);
        frame.extend_from_slice(&[9, 9]);
        assert_eq!(audio_payload(&frame).unwrap(), None);
    }

    #[test]
    fn truncated_frames_are_rejected() {
        let err = audio_payload(&[0]).unwrap_err();
        assert!(matches!(
            err.kind(),
            FabulistErrorKind::Speech(e) if matches!(e.kind, SpeechErrorKind::InvalidFrame(_))
        ));

        // Header length pointing past the end of the frame.
        let err = audio_payload(&[0, 64, b'P']).unwrap_err();
        assert!(matches!(
            err.kind(),
            FabulistErrorKind::Speech(e) if matches!(e.kind, SpeechErrorKind::InvalidFrame(_))
        ));
    }

    #[test]
    fn turn_end_detected_in_text_frames() {
        assert!(is_turn_end("X-RequestId:1\r\nPath:turn.end\r\n\r\n{}"));
        assert!(!is_turn_end("X-RequestId:1\r\nPath:turn.start\r\n\r\n{}"));
    }
}
