//! Trait definitions for the fabulist story generator.
//!
//! The three traits here are the seams between orchestration and the remote
//! generative services. The studio is generic over them; production code plugs
//! in the clients from `fabulist_models`, tests plug in mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{Illustrator, Narrator, StoryTeller};
