//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Date-time layouts accepted in front-matter, tried in order
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts, read as midnight UTC
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse an ISO-ish date string into a UTC instant
///
/// Values carrying an offset (RFC 3339, RFC 2822) are converted to UTC;
/// values without one are taken as UTC already.
///
/// # Examples
/// ```ignore
/// parse_date("2023-01-15")                // -> 2023-01-15T00:00:00Z
/// parse_date("2023-01-15T10:30:00+02:00") // -> 2023-01-15T08:30:00Z
/// ```
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    None
}

/// Format a date the way RSS `<pubDate>` expects (RFC 822 / 2822)
pub fn date_rss<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.to_rfc2822()
}

/// Short `YYYY-MM-DD` form used in listings
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date("2023-01-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap());

        let dt = parse_date("2023/01/15").unwrap();
        assert_eq!(short_date(&dt), "2023-01-15");
    }

    #[test]
    fn test_parse_datetime_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00Z"), Some(expected));
        assert_eq!(parse_date("2024-01-15 10:30"), Some(expected));
        assert_eq!(parse_date("Mon, 15 Jan 2024 10:30:00 +0000"), Some(expected));
    }

    #[test]
    fn test_parse_date_with_offset() {
        let dt = parse_date("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2023-02-30"), None);
    }

    #[test]
    fn test_date_rss() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 5, 6, 7).unwrap();
        assert_eq!(date_rss(&dt), "Tue, 2 Jan 2024 05:06:07 +0000");
    }
}
