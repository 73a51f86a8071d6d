//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

/// UTC timestamp used for host creation times and snapshot times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 as well as naive ISO-8601 without an offset
/// (`2024-05-01T10:00:00.123456`), which is read as UTC.
///
/// # Errors
///
/// Returns the chrono parse error of the naive form when neither shape
/// matches.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().map(|naive| naive.and_utc())
}

/// Serde adapter for [`Timestamp`] fields that may arrive without an offset.
///
/// Use with `#[serde(with = "crate::time::lenient")]`.
pub mod lenient {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Timestamp, parse_timestamp};

    /// Serialize as RFC 3339.
    ///
    /// # Errors
    ///
    /// Propagates the serializer error.
    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        ts.serialize(serializer)
    }

    /// Deserialize from RFC 3339 or naive ISO-8601.
    ///
    /// # Errors
    ///
    /// Returns a custom error when the string is not a timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
