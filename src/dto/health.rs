use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use super::format_timestamp;

/// Liveness payload returned by the `/health` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Health status, always `"ok"`.
    #[schema(example = "ok")]
    pub status: String,
    /// Time of the check as an ISO-8601 UTC timestamp with millisecond precision.
    #[schema(example = "2026-02-17T10:00:00.000Z")]
    pub timestamp: String,
}

impl HealthStatus {
    /// Build a healthy status stamped with `at`.
    pub fn ok_at(at: OffsetDateTime) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: format_timestamp(at),
        }
    }
}
