use std::sync::Arc;

use crate::auth::SessionVerifier;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable across requests — each invocation is an
/// independent, stateless computation.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Session verification is delegated entirely to an external provider.
    /// Held behind a trait so handler tests can stub it.
    pub sessions: Arc<dyn SessionVerifier>,
    pub config: Config,
}
