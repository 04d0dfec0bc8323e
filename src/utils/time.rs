use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Date as shown in admin listings.
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Backend timestamps come either as RFC 3339 or as a naive ISO string
/// written in UTC (`2025-05-01T12:34:56.123456`).
pub fn parse_backend_datetime(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
            .map(|naive| Utc.from_utc_datetime(&naive)),
    }
}

pub fn deserialize_backend_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_backend_datetime(&raw)
        .map_err(|e| serde::de::Error::custom(format!("Invalid timestamp '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(format_date(dt), "2024-03-09");
        assert_eq!(format_datetime(dt), "2024-03-09 14:05 UTC");
    }

    #[test]
    fn naive_timestamps_are_utc() {
        let dt = parse_backend_datetime("2025-05-01T12:34:56.123456").unwrap();
        assert_eq!(format_datetime(dt), "2025-05-01 12:34 UTC");

        let dt = parse_backend_datetime("2025-05-01T12:34:56").unwrap();
        assert_eq!(format_date(dt), "2025-05-01");
    }

    #[test]
    fn offsets_are_converted() {
        let dt = parse_backend_datetime("2025-05-01T23:30:00+02:00").unwrap();
        assert_eq!(format_datetime(dt), "2025-05-01 21:30 UTC");
        assert!(parse_backend_datetime("2025-05-01T12:00:00Z").is_ok());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_backend_datetime("yesterday").is_err());
        assert!(parse_backend_datetime("").is_err());
    }
}
