use axum::{Router, http::Uri};

use crate::{error::AppError, state::SharedState};

pub mod docs;
pub mod health;
pub mod root;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    root::router()
        .merge(health::router())
        .merge(docs::router())
        .fallback(not_found)
        .with_state(state)
}

/// Answer unknown paths with a JSON 404 instead of an empty body.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
