//! ISO-8601 timestamp check for presence events

use chrono::DateTime;

/// Check that `value` is an ISO-8601 UTC date-time such as
/// `2024-01-15T10:00:00Z` or `2024-01-15T10:00:00.250Z`.
///
/// The separator must be an uppercase `T` and the zone must be `Z`;
/// numeric offsets are rejected. Seconds run `00`-`59`; chrono alone would
/// take `60` as a leap second at any minute. Calendar validity is delegated
/// to chrono.
pub fn is_utc_datetime(value: &str) -> bool {
    // "YYYY-MM-DDTHH:MM:SSZ" is the shortest accepted form
    if !value.is_ascii() || value.len() < 20 {
        return false;
    }

    let bytes = value.as_bytes();
    if bytes[10] != b'T' || bytes[value.len() - 1] != b'Z' {
        return false;
    }

    if &value[17..19] > "59" {
        return false;
    }

    let fraction = &value[19..value.len() - 1];
    let fraction_ok = fraction.is_empty()
        || fraction
            .strip_prefix('.')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));

    fraction_ok && DateTime::parse_from_rfc3339(value).is_ok()
}
