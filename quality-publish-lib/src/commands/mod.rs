//! Command-line interface and orchestration for quality-publish
//!
//! # Implementation Model
//!
//! Three commands are provided:
//!
//! - **analyze**: discover and aggregate the configured reports, then print
//!   the metrics and/or write them as JSON
//! - **publish**: the same aggregation, followed by build registration and
//!   submission of the metrics to the dashboard
//! - **init**: generate a default configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to
//! the matching handler. Both aggregation commands go through `Common`, which
//! sets up logging, loads the configuration, applies pattern overrides, and
//! walks the report kinds in a fixed order (JUnit, PMD, FindBugs, Checkstyle,
//! JaCoCo), printing one progress line per kind.
//!
//! All output goes through the [`Host`] trait so commands can be run against
//! in-memory buffers.

mod analyze;
mod common;
mod config;
mod host;
mod init;
mod publish;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use analyze::{AnalyzeArgs, analyze_reports};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use publish::{DashboardArgs, PublishArgs, publish_reports};
pub use run::run;
