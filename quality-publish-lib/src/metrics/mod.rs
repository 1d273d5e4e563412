//! Metric model and the merge engine
//!
//! This module defines the common vocabulary that every report kind is
//! normalized into, and the store that accumulates those metrics over one
//! invocation.
//!
//! # Implementation Model
//!
//! Visitors never touch stored metrics directly. Each one produces a
//! [`MetricDelta`], a small map of metric name to `(partial value, severity)`,
//! which [`QualityResult::merge`] folds into the store:
//!
//! - an absent name is inserted as-is,
//! - a present name has its value summed and its severity raised to the
//!   maximum of both observations ([`Severity`] is an ordered lattice).
//!
//! Derived percentages are not merged. They are stored as
//! [`MetricValue::Ratio`] and replaced wholesale every time they are
//! recomputed. Once all reports are visited, [`QualityResult::snapshot`] yields
//! an immutable [`QualitySnapshot`] for reporting and publishing.

mod metric;
mod metric_delta;
mod metric_value;
pub mod names;
mod quality_result;
mod severity;

pub use metric::Metric;
pub use metric_delta::MetricDelta;
pub use metric_value::MetricValue;
pub use quality_result::{QualityResult, QualitySnapshot};
pub use severity::Severity;
