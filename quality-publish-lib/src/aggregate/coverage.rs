use crate::artifacts::{CounterType, JacocoReport};
use crate::metrics::names::{
    COVERAGE, LINE_COVERAGE, TOTAL_INSTRUCTIONS_COVERED, TOTAL_INSTRUCTIONS_MISSED, TOTAL_LINES_COVERED, TOTAL_LINES_MISSED,
};
use crate::metrics::{Metric, MetricDelta, MetricValue, QualityResult, Severity};

const RAW_COUNTERS: [&str; 4] = [
    TOTAL_LINES_COVERED,
    TOTAL_LINES_MISSED,
    TOTAL_INSTRUCTIONS_COVERED,
    TOTAL_INSTRUCTIONS_MISSED,
];

/// Extract the raw line and instruction counters of a coverage report.
///
/// Within one report the last counter of each type wins. Counter types other
/// than `LINE` and `INSTRUCTION` are ignored.
#[must_use]
pub fn normalize(report: &JacocoReport) -> MetricDelta {
    let mut delta = MetricDelta::zeroed(&RAW_COUNTERS);

    for counter in &report.counters {
        let (covered, missed) = match counter.counter_type() {
            Some(CounterType::Line) => (TOTAL_LINES_COVERED, TOTAL_LINES_MISSED),
            Some(CounterType::Instruction) => (TOTAL_INSTRUCTIONS_COVERED, TOTAL_INSTRUCTIONS_MISSED),
            _ => continue,
        };
        delta.set(covered, counter.covered, Severity::Ok);
        delta.set(missed, counter.missed, Severity::Ok);
    }

    delta
}

/// Percentage of covered items; no data at all counts as fully covered.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "percentages only need f64 precision")]
pub fn coverage_percent(covered: i64, missed: i64) -> f64 {
    let covered = covered as f64;
    let total = covered + missed as f64;
    if total > 0.0 { covered * 100.0 / total } else { 100.0 }
}

/// Recompute `line_coverage` and `coverage` from the accumulated raw counters.
///
/// The percentages are replaced, never summed, so they always reflect the
/// totals across every coverage report visited so far.
pub fn derive_percentages(result: &mut QualityResult) {
    for (name, covered, missed) in [
        (LINE_COVERAGE, TOTAL_LINES_COVERED, TOTAL_LINES_MISSED),
        (COVERAGE, TOTAL_INSTRUCTIONS_COVERED, TOTAL_INSTRUCTIONS_MISSED),
    ] {
        _ = result.remove(name);
        let percent = coverage_percent(result.count(covered), result.count(missed));
        _ = result.replace(Metric::new(name, MetricValue::Ratio(percent), Severity::Ok));
    }
}
