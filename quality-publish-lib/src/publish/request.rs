use crate::metrics::{Metric, QualitySnapshot, Severity};
use serde::{Deserialize, Serialize};

/// Build status reported during registration; this tool only runs after a build succeeded.
pub const BUILD_STATUS_SUCCESS: &str = "Success";

/// Code quality type understood by the dashboard.
pub const QUALITY_TYPE_STATIC_ANALYSIS: &str = "StaticAnalysis";

/// One metric as the dashboard expects it: numbers travel as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricEntry {
    pub name: String,
    pub value: String,
    pub formatted_value: String,
    pub status: Severity,
}

impl From<&Metric> for MetricEntry {
    fn from(metric: &Metric) -> Self {
        Self {
            name: metric.name.to_string(),
            value: metric.value.to_string(),
            formatted_value: metric.formatted_value(),
            status: metric.severity,
        }
    }
}

/// Identity of the CI build whose artifacts are being published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub job_name: String,
    pub job_url: String,
    pub build_number: String,
    pub build_url: String,
    pub instance_url: String,
    pub started_by: String,

    /// Milliseconds since the Unix epoch.
    pub start_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub number: String,
    pub build_url: String,
    pub job_name: String,
    pub job_url: String,
    pub instance_url: String,
    pub nice_name: String,
    pub build_status: &'static str,
    pub start_time: i64,
    pub started_by: String,
}

impl BuildRequest {
    #[must_use]
    pub fn new(build: &BuildInfo, nice_name: &str) -> Self {
        Self {
            number: build.build_number.clone(),
            build_url: build.build_url.clone(),
            job_name: build.job_name.clone(),
            job_url: build.job_url.clone(),
            instance_url: build.instance_url.clone(),
            nice_name: nice_name.to_string(),
            build_status: BUILD_STATUS_SUCCESS,
            start_time: build.start_time,
            started_by: build.started_by.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeQualityRequest {
    pub project_name: String,
    pub project_url: String,
    pub project_id: String,
    pub project_version: String,
    pub server_url: String,
    pub nice_name: String,
    #[serde(rename = "type")]
    pub quality_type: &'static str,
    pub timestamp: i64,
    #[serde(rename = "hygieiaId")]
    pub correlation_id: String,
    pub metrics: Vec<MetricEntry>,
}

impl CodeQualityRequest {
    /// Wrap a finished snapshot with build metadata.
    ///
    /// The record is stamped with the build start time; the report watermark is not sent.
    #[must_use]
    pub fn new(snapshot: &QualitySnapshot, build: &BuildInfo, nice_name: &str, correlation_id: &str) -> Self {
        Self {
            project_name: build.job_name.clone(),
            project_url: build.job_url.clone(),
            project_id: build.job_name.clone(),
            project_version: build.build_number.clone(),
            server_url: build.instance_url.clone(),
            nice_name: nice_name.to_string(),
            quality_type: QUALITY_TYPE_STATIC_ANALYSIS,
            timestamp: build.start_time,
            correlation_id: correlation_id.to_string(),
            metrics: snapshot.metrics.iter().map(MetricEntry::from).collect(),
        }
    }
}
