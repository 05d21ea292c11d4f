use std::sync::Arc;

use crate::config::Config;
use crate::resume::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
