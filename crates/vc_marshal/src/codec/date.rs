use alloc::string::{String, ToString};

use chrono::{DateTime, Utc};

/// `yyyy-MM-dd'T'HH:mm:ss.SSSZ`, e.g. `2014-03-05T10:22:01.123+0000`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Always rendered in UTC. Sub-millisecond precision is dropped.
#[inline]
pub(super) fn format_date(value: &DateTime<Utc>) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Any numeric offset is accepted and normalized to UTC.
///
/// The fraction must have exactly three digits, as every written date does.
/// Hand-edited values such as `10:22:01.5+0000` do not parse.
#[inline]
pub(super) fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(text, DATE_FORMAT)
        .ok()
        .map(|value| value.with_timezone(&Utc))
}

// -----------------------------------------------------------------------------
// Tests
