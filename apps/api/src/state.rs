use std::sync::Arc;

use crate::config::Config;
use crate::layout::{default_page_setup, PageSetup};

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Page geometry and default font applied to every export.
    pub page_setup: PageSetup,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            page_setup: default_page_setup(config.document_font),
            config: Arc::new(config),
        }
    }
}
