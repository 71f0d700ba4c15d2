use std::sync::Arc;

use crate::chat::store::SessionStore;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Production: `HfClient`; tests swap in
    /// a canned generator.
    pub generator: Arc<dyn TextGenerator>,
    /// Live chat transcripts, process-local only.
    pub sessions: SessionStore,
    pub config: Config,
}
