//! Timestamp parsing and the regional renderings used in the file header.

use crate::error::{ExportError, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Parse an ISO 8601 stamp.
///
/// Accepts RFC 3339 (`2024-06-01T00:00:00Z`), minute precision with an offset
/// (`2024-06-01T00:00Z`), and local forms without an offset
/// (`2024-06-01T00:00:00`, `2024-06-01T00:00`, `2024-06-01`). Local forms are
/// read in the machine's zone.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt),
        Err(err) => err,
    };

    let zulu = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .map(|rest| format!("{rest}+00:00"));
    let with_offset = zulu.as_deref().unwrap_or(trimmed);
    for fmt in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(with_offset, fmt) {
            return Ok(dt);
        }
    }

    let naive = trimmed
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
        });
    match naive {
        Ok(naive) => Ok(in_local_zone(naive)),
        Err(_) => Err(ExportError::InvalidTimestamp {
            value: value.to_string(),
            source: rfc3339_err,
        }),
    }
}

/// Pin a wall-clock time to the local zone; times skipped by a DST jump are
/// read as UTC-relative instead.
fn in_local_zone(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
        .fixed_offset()
}

/// Short date, short time and zone abbreviation: `5/31/2024 4:00 PM AKDT`.
pub fn format_stamp<Z: TimeZone>(at: &DateTime<Z>, tz: Tz) -> String {
    at.with_timezone(&tz)
        .format("%-m/%-d/%Y %-I:%M %p %Z")
        .to_string()
}

/// Four digit year in the target zone.
pub fn format_year<Z: TimeZone>(at: &DateTime<Z>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%Y").to_string()
}

/// Medium date used in "Accessed [...]": `May 31, 2024`.
pub fn format_accessed<Z: TimeZone>(at: &DateTime<Z>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%b %-d, %Y").to_string()
}

/// Compact stamp for filenames: `20240601_120000`.
pub fn format_compact<Z: TimeZone>(at: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    at.format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::US::Alaska;

    #[test]
    fn summer_stamp_uses_daylight_abbreviation() {
        let t = parse_timestamp("2024-06-01T00:00:00Z").unwrap();
        assert_eq!(format_stamp(&t, Alaska), "5/31/2024 4:00 PM AKDT");
        assert_eq!(format_year(&t, Alaska), "2024");
        assert_eq!(format_accessed(&t, Alaska), "May 31, 2024");
    }

    #[test]
    fn winter_stamp_uses_standard_abbreviation() {
        let t = parse_timestamp("2024-01-15T21:05:00Z").unwrap();
        assert_eq!(format_stamp(&t, Alaska), "1/15/2024 12:05 PM AKST");
    }

    #[test]
    fn new_year_boundary_follows_target_zone() {
        let t = parse_timestamp("2025-01-01T03:00:00Z").unwrap();
        assert_eq!(format_year(&t, Alaska), "2024");
        assert_eq!(format_accessed(&t, Alaska), "Dec 31, 2024");
    }

    #[test]
    fn minute_precision_with_zulu() {
        let t = parse_timestamp("2024-06-01T00:00Z").unwrap();
        assert_eq!(t, parse_timestamp("2024-06-01T00:00:00Z").unwrap());
        let t = parse_timestamp("2024-06-01T02:00+02:00").unwrap();
        assert_eq!(t, parse_timestamp("2024-06-01T00:00:00Z").unwrap());
    }

    #[test]
    fn fractional_seconds() {
        let t = parse_timestamp("2024-06-01T00:00:00.000Z").unwrap();
        assert_eq!(format_stamp(&t, Alaska), "5/31/2024 4:00 PM AKDT");
    }

    #[test]
    fn naive_date_time_is_local() {
        let expected = Local.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-06-01T00:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-06-01T00:00").unwrap(), expected);
    }

    #[test]
    fn date_only_is_local_midnight() {
        let expected = Local.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-06-01").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(ExportError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn compact_stamp() {
        let t = parse_timestamp("2024-06-01T12:00:05+00:00").unwrap();
        assert_eq!(format_compact(&t), "20240601_120005");
    }
}
