#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for quality-publish
//!
//! This library consolidates all functionality for the quality-publish tool, which
//! reads the static-analysis, test and coverage reports a CI build leaves behind,
//! folds them into one set of code quality metrics, and publishes that set to a
//! quality dashboard.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`artifacts`]: Discovery and parsing of report files
//! - [`aggregate`]: Normalization of reports into metrics
//! - [`metrics`]: Metric model and merge rules
//! - [`publish`]: Dashboard client and request payloads
//! - [`reports`]: Console and JSON output

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod aggregate;
pub mod artifacts;
pub mod metrics;
pub mod publish;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
