//! Timestamp parsing for the date formats found in feeds.
//!
//! RSS carries RFC 822/2822 dates, Atom and Dublin Core carry ISO 8601 /
//! RFC 3339 dates, and real-world feeds routinely mix them up. Parsing
//! therefore tries the hinted format first and falls back to the other.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Which date syntax a feed element is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// ISO 8601 / RFC 3339, as used by Atom and Dublin Core.
    Iso,
    /// RFC 822/2822, as used by RSS 2.0.
    Rfc822,
}

/// Parse a date string into seconds since the Unix epoch.
///
/// The `hint` format is tried first, then the other one. Returns `0` when
/// the string parses as neither.
pub fn parse_date(s: &str, hint: DateFormat) -> i64 {
    let s = s.trim();
    if s.is_empty() {
        return 0;
    }
    let attempts = match hint {
        DateFormat::Iso => [parse_iso_date as fn(&str) -> Option<i64>, parse_rfc822_date],
        DateFormat::Rfc822 => [parse_rfc822_date, parse_iso_date],
    };
    for attempt in attempts {
        if let Some(ts) = attempt(s) {
            return ts;
        }
    }
    0
}

fn parse_rfc822_date(s: &str) -> Option<i64> {
    DateTime::parse_from_rfc2822(s).ok().map(|dt| dt.timestamp())
}

fn parse_iso_date(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }
    // zone-less timestamps are taken as UTC
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp());
        }
    }
    // date-only values are pinned to noon UTC so timezone shifts of up to
    // half a day keep the calendar date intact
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let noon = date.and_hms_opt(12, 0, 0)?;
        return Some(noon.and_utc().timestamp());
    }
    None
}

/// Format an epoch timestamp for display, UTC.
pub fn date_time_to_string(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%a %b %e %H:%M:%S %Y").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc822_dates() {
        assert_eq!(
            parse_date("Sat, 07 Sep 2002 00:00:01 GMT", DateFormat::Rfc822),
            1031356801
        );
        assert_eq!(
            parse_date("Thu, 01 Jan 1970 00:00:00 +0000", DateFormat::Rfc822),
            0
        );
    }

    #[test]
    fn test_iso_dates() {
        assert_eq!(parse_date("2002-09-07T00:00:01Z", DateFormat::Iso), 1031356801);
        assert_eq!(
            parse_date("2002-09-07T02:00:01+02:00", DateFormat::Iso),
            1031356801
        );
        assert_eq!(parse_date("2002-09-07T00:00:01", DateFormat::Iso), 1031356801);
    }

    #[test]
    fn test_date_only_pins_to_noon() {
        assert_eq!(parse_date("2002-09-07", DateFormat::Iso), 1031400000);
    }

    #[test]
    fn test_wrong_hint_still_parses() {
        assert_eq!(
            parse_date("Sat, 07 Sep 2002 00:00:01 GMT", DateFormat::Iso),
            1031356801
        );
        assert_eq!(parse_date("2002-09-07T00:00:01Z", DateFormat::Rfc822), 1031356801);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_date("", DateFormat::Iso), 0);
        assert_eq!(parse_date("next tuesday", DateFormat::Rfc822), 0);
    }
}
