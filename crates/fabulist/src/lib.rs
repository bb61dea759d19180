//! fabulist: an illustrated, narrated story studio for short ideas.
//!
//! One idea in, three artifacts out: a children's story from a chat model,
//! an illustration from an image model, and an MP3 narration from the Edge
//! speech service. Sessions track what was generated so repeated requests
//! version image files and skip unchanged narrations.
//!
//! # Crates
//!
//! - `fabulist_core` - domain types: voices, sizes, stamps, prompt templates
//! - `fabulist_interface` - the [`StoryTeller`], [`Illustrator`], and
//!   [`Narrator`] seams
//! - `fabulist_models` - OpenAI REST clients and the Edge WebSocket client
//! - `fabulist_storage` - versioned artifact files under one root
//! - `fabulist_studio` - session state and pipeline orchestration
//! - `fabulist_server` - the embedded web UI
//!
//! # Example
//!
//! ```rust,ignore
//! use fabulist::{FabulistConfig, ImageSize, Session, Voice, live_studio};
//!
//! let config = FabulistConfig::load()?;
//! let studio = live_studio(&config.openai, config.storage.root, &api_key)?;
//! let mut session = Session::new();
//! let outcome = studio
//!     .generate_all(
//!         &mut session,
//!         fabulist_core::prompt::DEFAULT_STORY_TEMPLATE,
//!         "a sleepy red tractor",
//!         fabulist_core::prompt::DEFAULT_IMAGE_STYLE,
//!         ImageSize::Square,
//!         Voice::Ana,
//!     )
//!     .await?;
//! println!("{}", outcome.story().story());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod config;

// Re-export CLI types
pub use cli::{Cli, Commands};

// Re-export configuration types
pub use config::{FabulistConfig, StorageConfig};

// Re-export domain types
pub use fabulist_core::{ImageSize, Role, Stamp, Voice};

// Re-export error types
pub use fabulist_error::{FabulistError, FabulistErrorKind, FabulistResult};

// Re-export the generation seams
pub use fabulist_interface::{Illustrator, Narrator, StoryTeller};

// Re-export service clients
pub use fabulist_models::{EdgeNarrator, OpenAiChat, OpenAiConfig, OpenAiImage};

// Re-export artifact storage
pub use fabulist_storage::ArtifactStore;

// Re-export the studio orchestrator
pub use fabulist_studio::{
    AudioOutcome, ImageOutcome, LiveStudio, Session, StoryOutcome, StorybookOutcome, Studio,
    live_studio,
};

// Re-export the web server
pub use fabulist_server::{AppState, HttpConfig, create_router, serve};
