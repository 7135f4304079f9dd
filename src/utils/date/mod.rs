// Date utility functions
// Shared time arithmetic for the layout calculations

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// Minutes since local midnight for a datetime.
///
/// e.g. 14:30 local -> 870 (14*60 + 30). The result is always in `[0, 1439]`
/// and reflects the local wall clock only; it is not meant to round-trip
/// across day boundaries.
pub fn minute_of_day(datetime: DateTime<Local>) -> u32 {
    datetime.hour() * 60 + datetime.minute()
}

/// Parse a provider timestamp into a local datetime.
///
/// Accepts the three shapes calendar providers emit:
/// * RFC 3339 with offset (`2026-02-12T14:30:00-05:00`) - the offset is
///   honored and the instant converted to local time
/// * naive datetime (`2026-02-12T14:30:00` or `2026-02-12T14:30`) -
///   interpreted as local wall-clock time
/// * bare date (`2026-02-12`) - midnight local, the shape all-day events use
pub fn parse_timestamp(value: &str) -> Result<DateTime<Local>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default())
        })
        .with_context(|| format!("Unrecognized timestamp '{}'", value))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("Timestamp '{}' does not exist in the local timezone", value))
}
