use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::resources::store::ResourceStore;
use crate::resume::SectionExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Resume section extractor, configured with `RESUME_HEADER_RULE`.
    pub extractor: SectionExtractor,
    /// Company resource storage. Default: S3ResourceStore.
    pub resources: Arc<dyn ResourceStore>,
}
