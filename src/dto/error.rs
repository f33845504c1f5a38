use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON body attached to every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human readable description of the failure.
    pub message: String,
}
