use axum::{Json, Router, extract::State, routing::get};
use tracing::debug;

use crate::{dto::health::HealthStatus, state::SharedState};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthStatus))
)]
/// Return the liveness status of the service with the current timestamp.
pub async fn health(State(state): State<SharedState>) -> Json<HealthStatus> {
    let status = state.service().health();
    debug!(timestamp = %status.timestamp, "health check");
    Json(status)
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/health", get(health))
}
