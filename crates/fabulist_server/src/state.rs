//! Shared server state and listen settings.

use fabulist_models::OpenAiConfig;
use fabulist_storage::ArtifactStore;
use fabulist_studio::Session;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Listen address settings for the embedded web UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl HttpConfig {
    /// The `host:port` string to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// State shared across request handlers.
///
/// Sessions are keyed by a browser cookie and live for the life of the
/// process. Mutating handlers hold the write lock for their whole body, so
/// no two handlers work on one session concurrently.
#[derive(Clone)]
pub struct AppState {
    pub(crate) sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub(crate) openai: OpenAiConfig,
    pub(crate) store: ArtifactStore,
}

impl AppState {
    /// Create state with an empty session map.
    pub fn new(openai: OpenAiConfig, store: ArtifactStore) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            openai,
            store,
        }
    }

    /// The artifact store pages are served from.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }
}
