//! Web front end for the story studio.
//!
//! Serves a single-page HTML form backed by cookie-keyed sessions. Each
//! action button posts back to its own route, the handler mutates the
//! caller's [`fabulist_studio::Session`] under a write lock, and the page is
//! re-rendered from the updated state. Generated artifacts are served from
//! the storage root under `/artifacts/`.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod page;
mod routes;
mod server;
mod state;

pub use server::{create_router, serve};
pub use state::{AppState, HttpConfig};
