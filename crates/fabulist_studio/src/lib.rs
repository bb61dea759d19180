//! Orchestration for fabulist: per-session state and the generation
//! pipeline.
//!
//! A [`Studio`] owns one adapter per generative concern (story text,
//! illustration, narration) plus the artifact store, and exposes one method
//! per user action. All mutation flows through an explicit [`Session`]
//! passed by reference; rendering layers read the session afterwards.
//!
//! [`live_studio`] assembles a studio from the real service clients in
//! `fabulist_models`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod live;
mod session;
mod studio;

pub use live::{LiveStudio, live_studio};
pub use session::Session;
pub use studio::{
    AUDIO_UNCHANGED_NOTICE, AudioOutcome, ImageOutcome, STORY_FIRST_NOTICE, StoryOutcome,
    StorybookOutcome, Studio,
};
