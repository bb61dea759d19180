//! Edge TTS speech synthesis over WebSocket.
//!
//! Implements the free-tier protocol used by the Microsoft Edge browser's
//! read-aloud feature. A synthesis round opens a WebSocket, sends a
//! `speech.config` message selecting the output format, sends the text
//! wrapped in SSML, then collects binary audio frames until the service
//! signals `turn.end`.

mod client;
mod protocol;

pub use client::EdgeNarrator;
