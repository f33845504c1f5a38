use axum::{Router, extract::State, routing::get};
use tracing::debug;

use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Welcome message", body = String, content_type = "text/plain"))
)]
/// Return the fixed welcome message.
pub async fn greeting(State(state): State<SharedState>) -> &'static str {
    debug!("serving greeting");
    state.service().greeting()
}

/// Configure the root route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(greeting))
}
