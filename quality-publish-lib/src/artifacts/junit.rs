use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const LOG_TARGET: &str = "     junit";

/// A JUnit `<testsuite>` summary.
///
/// A `<testsuites>` root carrying aggregate totals deserializes the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JunitReport {
    #[serde(rename = "@tests", default)]
    pub tests: i64,

    #[serde(rename = "@failures", default)]
    pub failures: i64,

    #[serde(rename = "@errors", default)]
    pub errors: i64,

    #[serde(rename = "@timestamp", default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl JunitReport {
    #[must_use]
    pub const fn new(tests: i64, failures: i64, errors: i64) -> Self {
        Self {
            tests,
            failures,
            errors,
            timestamp: None,
        }
    }

    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Parse a JUnit timestamp.
///
/// Surefire and most other producers write a local date-time without an offset,
/// which is taken as UTC. RFC 3339 values with an explicit offset are honored.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.and_then(|text| {
        let parsed = parse_timestamp(&text);
        if parsed.is_none() {
            log::warn!(target: LOG_TARGET, "Ignoring unparseable test suite timestamp '{text}'");
        }
        parsed
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_without_offset() {
        let ts = parse_timestamp("2024-03-01T10:15:30").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_timestamp_with_fraction() {
        let ts = parse_timestamp("2024-03-01T10:15:30.250").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let ts = parse_timestamp("2024-03-01T12:15:30+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_parse_timestamp_zulu() {
        assert!(parse_timestamp("2024-03-01T10:15:30Z").is_some());
    }

    #[test]
    fn test_parse_timestamp_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_builder() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = JunitReport::new(5, 1, 0).with_timestamp(now);
        assert_eq!(report.tests, 5);
        assert_eq!(report.timestamp, Some(now));
    }
}
