use time::{
    OffsetDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// Error payloads.
pub mod error;
/// Health check payloads.
pub mod health;

/// ISO-8601 layout with millisecond precision and a literal `Z` suffix.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// Render `time` as a UTC ISO-8601 timestamp such as `2026-02-17T10:00:00.000Z`.
pub fn format_timestamp(time: OffsetDateTime) -> String {
    let utc = time.to_offset(UtcOffset::UTC);
    utc.format(TIMESTAMP_FORMAT)
        .or_else(|_| utc.format(&Rfc3339))
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_with_millisecond_precision() {
        let time = datetime!(2026-02-17 10:00:00.123456 UTC);
        assert_eq!(format_timestamp(time), "2026-02-17T10:00:00.123Z");
    }

    #[test]
    fn pads_whole_seconds() {
        let time = datetime!(2026-02-17 10:00:00 UTC);
        assert_eq!(format_timestamp(time), "2026-02-17T10:00:00.000Z");
    }

    #[test]
    fn converts_offsets_to_utc() {
        let time = datetime!(2026-02-17 12:30:05.5 +02:00);
        assert_eq!(format_timestamp(time), "2026-02-17T10:30:05.500Z");
    }

    #[test]
    fn output_parses_as_rfc3339() {
        let time = datetime!(1999-12-31 23:59:59.999 UTC);
        let parsed = OffsetDateTime::parse(&format_timestamp(time), &Rfc3339).unwrap();
        assert_eq!(parsed, time);
    }
}
