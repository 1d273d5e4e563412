use super::{Metric, MetricDelta, MetricValue};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// The running aggregate of every metric observed during one invocation.
///
/// Metrics are keyed by name, so at most one metric exists per name. Values only
/// ever grow by merging deltas; derived metrics are replaced wholesale through
/// [`QualityResult::replace`].
#[derive(Debug, Clone, Default)]
pub struct QualityResult {
    metrics: BTreeMap<&'static str, Metric>,
    timestamp: i64,
}

impl QualityResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert every entry of `delta`, summing values and keeping the highest severity.
    ///
    /// Merging the same delta twice counts it twice.
    pub fn merge(&mut self, delta: &MetricDelta) {
        for (name, partial, severity) in delta.iter() {
            let _ = self
                .metrics
                .entry(name)
                .and_modify(|existing| {
                    existing.value = existing.value.accumulate(partial);
                    existing.severity = existing.severity.merge(severity);
                })
                .or_insert_with(|| Metric::count(name, partial, severity));
        }
    }

    /// Move the watermark forward to `timestamp` (milliseconds since the epoch); never moves it back.
    pub fn advance_timestamp(&mut self, timestamp: i64) {
        self.timestamp = self.timestamp.max(timestamp);
    }

    /// Insert `metric`, discarding any existing metric of the same name.
    pub fn replace(&mut self, metric: Metric) -> Option<Metric> {
        self.metrics.insert(metric.name, metric)
    }

    pub fn remove(&mut self, name: &str) -> Option<Metric> {
        self.metrics.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.get(name)
    }

    /// Current counter value for `name`, treating an absent metric as zero.
    #[must_use]
    pub fn count(&self, name: &str) -> i64 {
        self.get(name).and_then(|m| m.value.as_count()).unwrap_or(0)
    }

    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Freeze the current state for hand-off to reporting and publishing.
    #[must_use]
    pub fn snapshot(&self) -> QualitySnapshot {
        QualitySnapshot {
            metrics: self.metrics.values().cloned().collect(),
            timestamp: self.timestamp,
        }
    }
}

/// Immutable view of a finished [`QualityResult`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualitySnapshot {
    /// Metrics ordered by name.
    pub metrics: Vec<Metric>,

    /// Watermark in milliseconds since the Unix epoch, `0` when no report carried a timestamp.
    pub timestamp: i64,
}

impl QualitySnapshot {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<MetricValue> {
        self.get(name).map(|m| m.value)
    }

    /// The watermark as a UTC date-time, if any report advanced it.
    #[must_use]
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        if self.timestamp == 0 {
            None
        } else {
            DateTime::from_timestamp_millis(self.timestamp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Severity;

    fn delta(entries: &[(&'static str, i64, Severity)]) -> MetricDelta {
        let mut delta = MetricDelta::new();
        for &(name, value, severity) in entries {
            delta.set(name, value, severity);
        }
        delta
    }

    #[test]
    fn test_merge_inserts_absent() {
        let mut result = QualityResult::new();
        result.merge(&delta(&[("a", 3, Severity::Warning)]));
        let metric = result.get("a").unwrap();
        assert_eq!(metric.value, MetricValue::Count(3));
        assert_eq!(metric.severity, Severity::Warning);
    }

    #[test]
    fn test_merge_sums_and_escalates() {
        let mut result = QualityResult::new();
        result.merge(&delta(&[("a", 3, Severity::Alert)]));
        result.merge(&delta(&[("a", 4, Severity::Ok)]));
        let metric = result.get("a").unwrap();
        assert_eq!(metric.value, MetricValue::Count(7));
        assert_eq!(metric.severity, Severity::Alert);
    }

    #[test]
    fn test_merge_same_delta_twice_double_counts() {
        let mut result = QualityResult::new();
        let d = delta(&[("a", 5, Severity::Ok)]);
        result.merge(&d);
        result.merge(&d);
        assert_eq!(result.count("a"), 10);
    }

    #[test]
    fn test_merge_empty_delta_is_noop() {
        let mut result = QualityResult::new();
        result.merge(&MetricDelta::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_count_absent_is_zero() {
        let result = QualityResult::new();
        assert_eq!(result.count("missing"), 0);
    }

    #[test]
    fn test_watermark_is_monotonic() {
        let mut result = QualityResult::new();
        assert_eq!(result.timestamp(), 0);
        result.advance_timestamp(1_000);
        result.advance_timestamp(500);
        assert_eq!(result.timestamp(), 1_000);
        result.advance_timestamp(2_000);
        assert_eq!(result.timestamp(), 2_000);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut result = QualityResult::new();
        assert!(result.replace(Metric::new("r", MetricValue::Ratio(10.0), Severity::Ok)).is_none());
        let previous = result.replace(Metric::new("r", MetricValue::Ratio(20.0), Severity::Ok));
        assert_eq!(previous.map(|m| m.value), Some(MetricValue::Ratio(10.0)));
        assert_eq!(result.len(), 1);
        assert!(result.remove("r").is_some());
        assert!(result.is_empty());
    }

    #[test]
    fn test_snapshot_is_ordered_and_detached() {
        let mut result = QualityResult::new();
        result.merge(&delta(&[("b", 1, Severity::Ok), ("a", 2, Severity::Ok)]));
        result.advance_timestamp(1_700_000_000_000);
        let snapshot = result.snapshot();

        result.merge(&delta(&[("a", 100, Severity::Ok)]));

        let names: Vec<_> = snapshot.metrics.iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(snapshot.value("a"), Some(MetricValue::Count(2)));
        assert_eq!(snapshot.timestamp, 1_700_000_000_000);
        assert!(snapshot.timestamp_utc().is_some());
    }

    #[test]
    fn test_snapshot_without_timestamp() {
        let snapshot = QualityResult::new().snapshot();
        assert!(snapshot.timestamp_utc().is_none());
        assert!(snapshot.get("anything").is_none());
    }
}
