use time::OffsetDateTime;

use crate::dto::health::HealthStatus;

/// Fixed greeting served on `/`.
pub const GREETING: &str = "Hello from the unit testing introduction.";

/// Stateless service backing the root and health routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppService;

impl AppService {
    /// Create the service. It holds no state, so construction cannot fail.
    pub fn new() -> Self {
        Self
    }

    /// Return the welcome message.
    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Report liveness stamped with the current wall-clock time.
    ///
    /// No dependency is probed: the status is always `"ok"`.
    pub fn health(&self) -> HealthStatus {
        HealthStatus::ok_at(OffsetDateTime::now_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Duration, format_description::well_known::Rfc3339};

    #[test]
    fn greeting_is_constant_and_non_empty() {
        let service = AppService::new();
        let first = service.greeting();
        assert!(!first.is_empty());
        for _ in 0..10 {
            assert_eq!(service.greeting(), first);
        }
    }

    #[test]
    fn health_status_is_always_ok() {
        let service = AppService::new();
        for _ in 0..10 {
            assert_eq!(service.health().status, "ok");
        }
    }

    #[test]
    fn health_timestamp_is_close_to_now() {
        let before = OffsetDateTime::now_utc();
        let status = AppService::new().health();
        let after = OffsetDateTime::now_utc();

        let stamped = OffsetDateTime::parse(&status.timestamp, &Rfc3339).unwrap();
        // Milliseconds are truncated, so allow the stamp to trail `before` slightly.
        assert!(stamped >= before - Duration::milliseconds(1));
        assert!(stamped <= after + Duration::seconds(2));
        assert!(status.timestamp.ends_with('Z'));
    }

    #[test]
    fn successive_timestamps_do_not_decrease() {
        let service = AppService::new();
        let first = OffsetDateTime::parse(&service.health().timestamp, &Rfc3339).unwrap();
        let second = OffsetDateTime::parse(&service.health().timestamp, &Rfc3339).unwrap();
        assert!(second >= first);
    }
}
