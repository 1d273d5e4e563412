//! Normalization of parsed reports into a single quality result
//!
//! # Implementation Model
//!
//! The [`Aggregator`] owns one [`QualityResult`] and is fed one [`Artifact`]
//! at a time. Dispatch is a single exhaustive `match` over the artifact kind:
//!
//! - test results produce the four test metrics and advance the watermark,
//! - FindBugs, PMD and Checkstyle reports fill the four violation buckets,
//! - coverage reports add raw line/instruction counters, after which the
//!   coverage percentages are recomputed from the running totals,
//! - Mocha and Cucumber reports are accepted and ignored.
//!
//! Each normalizer is a pure function from a report to a
//! [`MetricDelta`](crate::metrics::MetricDelta); only the aggregator mutates
//! the result. The aggregator is meant to be driven by a single caller: feed
//! every artifact, then call [`Aggregator::finish`].

pub mod coverage;
pub mod test_results;
pub mod violations;

use crate::artifacts::Artifact;
use crate::metrics::{QualityResult, QualitySnapshot};

const LOG_TARGET: &str = " aggregate";

#[derive(Debug, Default)]
pub struct Aggregator {
    result: QualityResult,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one report into the running result.
    pub fn visit(&mut self, artifact: &Artifact) {
        match artifact {
            Artifact::Junit(report) => {
                self.result.merge(&test_results::normalize(report));
                if let Some(timestamp) = test_results::timestamp_millis(report) {
                    self.result.advance_timestamp(timestamp);
                }
            }
            Artifact::FindBugs(report) => self.result.merge(&violations::findbugs(report)),
            Artifact::Pmd(report) => self.result.merge(&violations::pmd(report)),
            Artifact::Checkstyle(report) => self.result.merge(&violations::checkstyle(report)),
            Artifact::Jacoco(report) => {
                self.result.merge(&coverage::normalize(report));
                coverage::derive_percentages(&mut self.result);
            }
            Artifact::MochaSpec(_) | Artifact::CucumberJson(_) => {}
        }

        match artifact.kind() {
            Some(kind) => log::debug!(target: LOG_TARGET, "Merged {kind} report, result holds {} metric(s)", self.result.len()),
            None => log::debug!(target: LOG_TARGET, "Ignored unsupported report"),
        }
    }

    /// The result accumulated so far.
    #[must_use]
    pub const fn result(&self) -> &QualityResult {
        &self.result
    }

    /// Consume the aggregator, yielding the finished metric collection.
    #[must_use]
    pub fn finish(self) -> QualitySnapshot {
        self.result.snapshot()
    }
}
