use super::Host;
use super::common::{Common, CommonArgs};
use super::config::validate_dashboard_url;
use crate::Result;
use crate::publish::{BuildInfo, BuildRequest, CodeQualityRequest, DashboardClient};
use chrono::Utc;
use clap::{Args, Parser};
use std::io::Write;

const LOG_TARGET: &str = "   publish";

/// Dashboard connection and build identity
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Root of the dashboard REST API (overrides the configuration file)
    #[arg(long, value_name = "URL")]
    pub dashboard_url: Option<String>,

    /// Dashboard API token
    #[arg(long, value_name = "TOKEN", env = "QUALITY_PUBLISH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Name of the CI instance as registered with the dashboard (overrides the configuration file)
    #[arg(long, value_name = "NAME")]
    pub nice_name: Option<String>,

    /// Full name of the CI job
    #[arg(long, value_name = "NAME", env = "JOB_NAME", default_value = "")]
    pub job_name: String,

    /// URL of the CI job
    #[arg(long, value_name = "URL", env = "JOB_URL", default_value = "")]
    pub job_url: String,

    /// Build number within the job
    #[arg(long, value_name = "NUMBER", env = "BUILD_NUMBER", default_value = "")]
    pub build_number: String,

    /// URL of the build
    #[arg(long, value_name = "URL", env = "BUILD_URL", default_value = "")]
    pub build_url: String,

    /// URL of the CI server
    #[arg(long, value_name = "URL", env = "JENKINS_URL", default_value = "")]
    pub instance_url: String,

    /// User who started the build
    #[arg(long, value_name = "USER", env = "BUILD_USER", default_value = "")]
    pub started_by: String,

    /// Build start time in milliseconds since the Unix epoch (default is now)
    #[arg(long, value_name = "MILLIS")]
    pub start_time: Option<i64>,

    /// Exit with status code 1 if the dashboard does not accept the metrics
    #[arg(long)]
    pub error_if_rejected: bool,
}

#[derive(Parser, Debug)]
pub struct PublishArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten, next_help_heading = "Dashboard")]
    pub dashboard: DashboardArgs,
}

/// Aggregate the configured reports, register the build and publish the metrics.
pub async fn publish_reports<H: Host>(host: &mut H, args: &PublishArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;

    let url = args.dashboard.dashboard_url.as_ref().unwrap_or(&common.config.dashboard.url).clone();
    validate_dashboard_url(&url)?;
    let nice_name = args.dashboard.nice_name.as_ref().unwrap_or(&common.config.dashboard.nice_name).clone();
    let client = DashboardClient::new(&url, args.dashboard.token.as_deref(), common.config.dashboard.request_timeout)?;

    let snapshot = common.collect()?;
    common.report(&snapshot, false)?;

    let build = BuildInfo {
        job_name: args.dashboard.job_name.clone(),
        job_url: args.dashboard.job_url.clone(),
        build_number: args.dashboard.build_number.clone(),
        build_url: args.dashboard.build_url.clone(),
        instance_url: args.dashboard.instance_url.clone(),
        started_by: args.dashboard.started_by.clone(),
        start_time: args.dashboard.start_time.unwrap_or_else(|| Utc::now().timestamp_millis()),
    };

    let registration = client.register_build(&BuildRequest::new(&build, &nice_name)).await?;
    let correlation_id = if registration.is_created() {
        registration.correlation_id().to_string()
    } else {
        log::warn!(target: LOG_TARGET, "Build registration was not accepted: {registration}");
        let _ = writeln!(common.host().error(), "Failed registering build. {registration}");
        String::new()
    };

    let _ = writeln!(common.host().output(), "Publishing {} metrics to {url}", snapshot.metrics.len());

    let request = CodeQualityRequest::new(&snapshot, &build, &nice_name, &correlation_id);
    let response = client.publish_quality(&request).await?;

    if response.is_created() {
        let _ = writeln!(common.host().output(), "Published complete metric data. {response}");
    } else {
        log::error!(target: LOG_TARGET, "Code quality submission was not accepted: {response}");
        let _ = writeln!(common.host().error(), "Failed publishing complete metric data. {response}");

        if args.dashboard.error_if_rejected {
            common.host().exit(1);
        }
    }

    Ok(())
}
