//! Hand-off of a finished quality snapshot to the dashboard
//!
//! Publishing is two requests: the build is registered first, and the id the
//! dashboard returns is attached to the code quality submission so the two
//! records can be correlated.

mod client;
mod request;

pub use client::{DashboardClient, DashboardResponse};
pub use request::{BUILD_STATUS_SUCCESS, BuildInfo, BuildRequest, CodeQualityRequest, MetricEntry, QUALITY_TYPE_STATIC_ANALYSIS};
