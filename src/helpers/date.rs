//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a CMS timestamp
///
/// Accepts RFC 3339 (`2023-05-10T00:00:00.000Z`), a zone-less datetime
/// (taken as UTC) or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    tracing::debug!("Unrecognised timestamp {:?}", raw);
    None
}

/// Format a date like "May 10, 2023"
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Format a raw publication timestamp as a short date in `tz`
///
/// Absent, empty or unparseable input yields `None`.
pub fn format_published<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let date = parse_timestamp(raw?)?;
    Some(short_date(&date.with_timezone(tz)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    #[test]
    fn test_format_published_utc() {
        assert_eq!(
            format_published(Some("2023-05-10T00:00:00Z"), &Utc),
            Some("May 10, 2023".to_string())
        );
    }

    #[test]
    fn test_format_published_in_timezone() {
        let tz: Tz = "America/New_York".parse().unwrap();
        assert_eq!(
            format_published(Some("2023-05-10T00:00:00Z"), &tz),
            Some("May 9, 2023".to_string())
        );
    }

    #[test]
    fn test_format_published_absent() {
        assert_eq!(format_published(None, &Utc), None);
        assert_eq!(format_published(Some(""), &Utc), None);
        assert_eq!(format_published(Some("yesterday"), &Utc), None);
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2023, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2023-01-05"), Some(expected));
        assert_eq!(parse_timestamp("2023-01-05T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2023-01-05T00:00:00"), Some(expected));
    }

    #[test]
    fn test_date_xml() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(date_xml(&date), "2024-01-15T10:30:00+00:00");
    }
}
