use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::user_data::store::UserDataStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed in production, in-memory without `DATABASE_URL`.
    pub store: Arc<dyn UserDataStore>,
    /// The completion API. Every model call goes through here.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
