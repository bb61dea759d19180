//! Router assembly and the listen loop.

use crate::routes;
use crate::state::{AppState, HttpConfig};
use axum::Router;
use axum::routing::{get, post};
use fabulist_error::{FabulistResult, ServerError, ServerErrorKind};
use fabulist_models::OpenAiConfig;
use fabulist_storage::ArtifactStore;
use std::path::PathBuf;
use tracing::info;

/// Build the studio router over the given state.
///
/// # Example
///
/// ```rust,ignore
/// let store = ArtifactStore::new("storage");
/// let app = create_router(AppState::new(OpenAiConfig::default(), store));
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/generate", post(routes::generate))
        .route("/image", post(routes::image))
        .route("/audio", post(routes::audio))
        .route("/artifacts/*path", get(routes::artifact))
        .with_state(state)
}

/// Bind the configured address and serve the studio until shutdown.
pub async fn serve(
    http: HttpConfig,
    openai: OpenAiConfig,
    storage_root: PathBuf,
) -> FabulistResult<()> {
    let state = AppState::new(openai, ArtifactStore::new(storage_root));
    let router = create_router(state);

    let address = http.address();
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: address.clone(),
            message: e.to_string(),
        })
    })?;
    info!(address = %address, "Story studio listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Io(e.to_string())))?;
    Ok(())
}
