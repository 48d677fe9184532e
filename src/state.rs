//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::gcp::GcpError;
use crate::gcp::gemini::{GeminiClient, Part};
use crate::gcp::storage::StorageClient;
use crate::session::{ChatSession, SessionSlot};

/// State shared across all HTTP handlers.
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Cloud Storage upload client.
    pub storage: StorageClient,
    /// Vertex AI model client.
    pub gemini: GeminiClient,
    /// The process-wide chat session, created on first use.
    pub session: SessionSlot,
}

impl AppState {
    /// Send `parts` through the shared session, creating it if absent.
    ///
    /// The session lock is held for the whole model round-trip, serializing
    /// conversation turns across concurrent requests.
    pub async fn send_to_session(&self, parts: Vec<Part>) -> Result<String, GcpError> {
        let mut slot = self.session.lock().await;
        let session = slot.get_or_insert_with(ChatSession::new);
        session.send(&self.gemini, parts).await
    }
}
