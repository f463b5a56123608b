use std::sync::Arc;

use crate::advisory::AdvisoryBackend;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable advisory backend. Live OpenRouter client when a key is
    /// configured at startup, otherwise a disabled variant.
    pub advisory: Arc<dyn AdvisoryBackend>,
    /// In-memory per-upload sessions: resume text, analysis results, and
    /// cached advisory responses. Nothing persists past process lifetime.
    pub sessions: SessionStore,
    #[allow(dead_code)]
    pub config: Config,
}
