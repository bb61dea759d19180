//! Core data types for the fabulist story generator.
//!
//! This crate provides the vocabulary shared across the fabulist workspace:
//! conversation roles, the speech voice catalog, image sizes, artifact stamps,
//! and the prompt templates with their render functions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod prompt;
mod role;
mod size;
mod stamp;
mod voice;

pub use role::Role;
pub use size::ImageSize;
pub use stamp::Stamp;
pub use voice::Voice;
