//! Normalizers for the linter-style reports.
//!
//! Every linter report lands in the same four buckets. The buckets are always
//! emitted, even at zero, so a clean run still reports `0` violations.

use crate::artifacts::{BugPriority, CheckstyleReport, FindBugsReport, PmdReport};
use crate::metrics::names::{BLOCKER_VIOLATIONS, CRITICAL_VIOLATIONS, MAJOR_VIOLATIONS, VIOLATIONS};
use crate::metrics::{MetricDelta, Severity};

const BUCKETS: [&str; 4] = [BLOCKER_VIOLATIONS, CRITICAL_VIOLATIONS, MAJOR_VIOLATIONS, VIOLATIONS];

/// Where a single record is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Blocker,
    Critical,
    Major,
    Minor,
}

impl Bucket {
    const fn metric(self) -> (&'static str, Severity) {
        match self {
            Self::Blocker => (BLOCKER_VIOLATIONS, Severity::Alert),
            Self::Critical => (CRITICAL_VIOLATIONS, Severity::Alert),
            Self::Major => (MAJOR_VIOLATIONS, Severity::Warning),
            Self::Minor => (VIOLATIONS, Severity::Warning),
        }
    }
}

fn tally(buckets: impl IntoIterator<Item = Bucket>) -> MetricDelta {
    let mut delta = MetricDelta::zeroed(&BUCKETS);
    for bucket in buckets {
        let (name, severity) = bucket.metric();
        delta.increment(name, severity);
    }
    delta
}

const fn classify_findbugs(priority: BugPriority) -> Bucket {
    match priority {
        BugPriority::Blocker => Bucket::Blocker,
        BugPriority::Critical => Bucket::Critical,
        BugPriority::Normal => Bucket::Major,
        BugPriority::Low => Bucket::Minor,
    }
}

const fn classify_pmd(priority: i64) -> Bucket {
    match priority {
        1 => Bucket::Blocker,
        2 => Bucket::Critical,
        3 => Bucket::Major,
        _ => Bucket::Minor,
    }
}

// "error" is counted as a blocker and "warning" as critical.
fn classify_checkstyle(severity: &str) -> Bucket {
    match severity {
        "error" => Bucket::Blocker,
        "warning" => Bucket::Critical,
        "info" => Bucket::Major,
        _ => Bucket::Minor,
    }
}

/// Unrecognized bug priorities are dropped rather than counted.
#[must_use]
pub fn findbugs(report: &FindBugsReport) -> MetricDelta {
    tally(
        report
            .files
            .iter()
            .flat_map(|file| &file.bugs)
            .filter_map(|bug| bug.priority().map(classify_findbugs)),
    )
}

#[must_use]
pub fn pmd(report: &PmdReport) -> MetricDelta {
    tally(
        report
            .files
            .iter()
            .flat_map(|file| &file.violations)
            .map(|violation| classify_pmd(violation.priority)),
    )
}

#[must_use]
pub fn checkstyle(report: &CheckstyleReport) -> MetricDelta {
    tally(
        report
            .files
            .iter()
            .flat_map(|file| &file.errors)
            .map(|error| classify_checkstyle(&error.severity)),
    )
}
