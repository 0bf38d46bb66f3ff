//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state shared across request handlers.
///
/// The persistence connection behind the service is established once at
/// startup and injected here, so handlers stay testable with substitute
/// repository implementations.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
