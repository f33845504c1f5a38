use std::sync::Arc;

use crate::services::app_service::AppService;

/// Shared handle to [`AppState`].
pub type SharedState = Arc<AppState>;

/// Central application state handed to every route handler.
///
/// Built once at startup; handlers only read from it.
#[derive(Debug, Default)]
pub struct AppState {
    service: AppService,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(service: AppService) -> SharedState {
        Arc::new(Self { service })
    }

    /// Service answering the root and health routes.
    pub fn service(&self) -> &AppService {
        &self.service
    }
}
