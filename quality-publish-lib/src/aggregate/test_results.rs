use crate::artifacts::JunitReport;
use crate::metrics::names::{TEST_ERRORS, TEST_FAILURES, TEST_SUCCESS_DENSITY, TESTS};
use crate::metrics::{MetricDelta, Severity};

/// Normalize a test suite summary into the four test metrics.
///
/// Inconsistent counts are passed through, so the success density can go negative.
/// Counts at the limits of `i64` saturate.
#[must_use]
pub fn normalize(report: &JunitReport) -> MetricDelta {
    let passed = report.tests.saturating_sub(report.failures).saturating_sub(report.errors);

    let mut delta = MetricDelta::new();
    delta.set(TESTS, report.tests, Severity::Ok);
    delta.set(TEST_FAILURES, report.failures, Severity::when_nonzero(report.failures, Severity::Warning));
    delta.set(TEST_ERRORS, report.errors, Severity::when_nonzero(report.errors, Severity::Alert));
    delta.set(TEST_SUCCESS_DENSITY, passed, Severity::Ok);
    delta
}

/// The report's timestamp in milliseconds since the epoch.
#[must_use]
pub fn timestamp_millis(report: &JunitReport) -> Option<i64> {
    report.timestamp.map(|ts| ts.timestamp_millis())
}
