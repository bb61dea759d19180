//! Error types for the fabulist story generator.
//!
//! This crate provides the foundation error types used throughout the fabulist
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabulist_error::{FabulistResult, HttpError};
//!
//! fn fetch_data() -> FabulistResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod chat;
mod config;
mod error;
mod http;
mod image;
mod json;
mod server;
mod speech;
mod storage;

pub use builder::BuilderError;
pub use chat::{ChatError, ChatErrorKind};
pub use config::ConfigError;
pub use error::{FabulistError, FabulistErrorKind, FabulistResult};
pub use http::HttpError;
pub use image::{ImageError, ImageErrorKind};
pub use json::JsonError;
pub use server::{ServerError, ServerErrorKind};
pub use speech::{SpeechError, SpeechErrorKind};
pub use storage::{StorageError, StorageErrorKind};
