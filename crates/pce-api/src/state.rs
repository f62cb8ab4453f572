//! Shared application state for the Axum server.

use std::sync::Arc;

use pce_engine::ParserEngine;
use pce_schema_service::ParserConfigSchemaService;

/// Shared application state, cheap to clone into every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ParserConfigSchemaService>,
}

impl AppState {
    pub fn new(service: ParserConfigSchemaService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// State around an arbitrary engine and rules schema.
    pub fn with_engine(engine: Arc<dyn ParserEngine>, schema: impl Into<String>) -> Self {
        Self::new(ParserConfigSchemaService::new(engine, schema))
    }

    /// State backed by the built-in regex engine.
    pub fn with_regex_engine() -> Self {
        Self::new(ParserConfigSchemaService::with_regex_engine())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_regex_engine()
    }
}
