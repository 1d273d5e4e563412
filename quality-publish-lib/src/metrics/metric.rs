use super::{MetricValue, Severity};

/// A named, finalized metric in a quality result.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub value: MetricValue,
    pub severity: Severity,
}

impl Metric {
    #[must_use]
    pub const fn new(name: &'static str, value: MetricValue, severity: Severity) -> Self {
        Self { name, value, severity }
    }

    #[must_use]
    pub const fn count(name: &'static str, count: i64, severity: Severity) -> Self {
        Self::new(name, MetricValue::Count(count), severity)
    }

    /// The display string shown by dashboards.
    #[must_use]
    pub fn formatted_value(&self) -> String {
        self.value.formatted()
    }
}
