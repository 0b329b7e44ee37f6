use std::sync::Arc;

use crate::config::Config;
use crate::models::resume::ResumeRecord;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume content, loaded once at startup and never mutated.
    pub record: Arc<ResumeRecord>,
    pub config: Config,
}
