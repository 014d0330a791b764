use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::lookup::civic_client::RepresentativeSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable clients; no per-user flow state lives here.
#[derive(Clone)]
pub struct AppState {
    /// Civic-data lookup. Default: `RepresentClient` against the Represent API.
    pub representatives: Arc<dyn RepresentativeSource>,
    /// `None` when no LLM credential is configured; enhancement then fails with 500.
    pub text_generator: Option<Arc<dyn TextGenerator>>,
}
