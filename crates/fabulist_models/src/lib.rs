//! Generative service clients for fabulist.
//!
//! Two provider modules:
//! - [`openai`] — REST clients for chat completions ([`OpenAiChat`]) and image
//!   generation ([`OpenAiImage`])
//! - [`edge`] — WebSocket client for the Edge speech service
//!   ([`EdgeNarrator`])
//!
//! All clients implement the seam traits from `fabulist_interface` and map
//! failures into the domain error kinds from `fabulist_error`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod edge;
pub mod openai;

pub use edge::EdgeNarrator;
pub use openai::{OpenAiChat, OpenAiConfig, OpenAiImage};
