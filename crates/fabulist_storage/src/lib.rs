//! Versioned artifact storage for fabulist.
//!
//! Each story generation is keyed by a [`Stamp`](fabulist_core::Stamp); this
//! crate lays its artifacts out under a configurable root:
//!
//! ```text
//! {root}/
//! ├── texts/story-{stamp}.txt
//! ├── images/image-{stamp}-v{version}.png
//! └── audios/audio-{stamp}-{voice}.mp3
//! ```
//!
//! Story and image files are append-only history; audio files are replaced in
//! place by the orchestration layer, which removes the previous live file
//! before writing the next.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use fabulist_error::{StorageError, StorageErrorKind};
pub use store::ArtifactStore;
