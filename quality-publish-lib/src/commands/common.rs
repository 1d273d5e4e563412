//! Common processing logic shared between the analyze and publish commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::aggregate::Aggregator;
use crate::artifacts::{ArtifactKind, discover, load};
use crate::metrics::QualitySnapshot;
use crate::reports::{generate_console, generate_json};
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use std::io::Write;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "    common";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the analyze and publish commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Directory that report patterns are resolved against
    #[arg(long, default_value = ".", value_name = "PATH")]
    pub workspace: Utf8PathBuf,

    /// Path to configuration file (default is `quality-publish.toml` in the workspace)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// JUnit XML reports, as comma-separated glob patterns
    #[arg(long, value_name = "PATTERNS", help_heading = "Report Patterns")]
    pub junit: Option<String>,

    /// PMD XML reports, as comma-separated glob patterns
    #[arg(long, value_name = "PATTERNS", help_heading = "Report Patterns")]
    pub pmd: Option<String>,

    /// FindBugs/SpotBugs XML reports, as comma-separated glob patterns
    #[arg(long, value_name = "PATTERNS", help_heading = "Report Patterns")]
    pub findbugs: Option<String>,

    /// Checkstyle XML reports, as comma-separated glob patterns
    #[arg(long, value_name = "PATTERNS", help_heading = "Report Patterns")]
    pub checkstyle: Option<String>,

    /// JaCoCo XML reports, as comma-separated glob patterns
    #[arg(long, value_name = "PATTERNS", help_heading = "Report Patterns")]
    pub jacoco: Option<String>,

    /// Write the metrics to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Print the metrics to the console. On by default for analyze when no JSON file is requested.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

impl CommonArgs {
    fn pattern_override(&self, kind: ArtifactKind) -> Option<&str> {
        match kind {
            ArtifactKind::Junit => self.junit.as_deref(),
            ArtifactKind::Pmd => self.pmd.as_deref(),
            ArtifactKind::Findbugs => self.findbugs.as_deref(),
            ArtifactKind::Checkstyle => self.checkstyle.as_deref(),
            ArtifactKind::Jacoco => self.jacoco.as_deref(),
        }
    }
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    host: &'a mut H,
    workspace: Utf8PathBuf,
    color: ColorMode,
    console: bool,
    json: Option<Utf8PathBuf>,
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging and load the configuration, applying command-line pattern overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let mut config = Config::load(&args.workspace, args.config.as_ref())?;
        for kind in ArtifactKind::iter() {
            if let Some(pattern) = args.pattern_override(kind) {
                log::debug!(target: LOG_TARGET, "Using command-line pattern '{pattern}' for {kind} reports");
                config.patterns.set(kind, pattern);
            }
        }

        Ok(Self {
            config,
            host,
            workspace: args.workspace.clone(),
            color: args.color,
            console: args.console,
            json: args.json.clone(),
        })
    }

    pub fn host(&mut self) -> &mut H {
        self.host
    }

    /// Discover, parse and aggregate every configured report kind
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or a report cannot be read or parsed
    pub fn collect(&mut self) -> Result<QualitySnapshot> {
        let mut aggregator = Aggregator::new();

        for kind in ArtifactKind::iter() {
            let pattern = self.config.patterns.get(kind);
            if pattern.trim().is_empty() {
                let _ = writeln!(self.host.output(), "Skipping {kind} analysis");
                continue;
            }

            let files = discover(&self.workspace, pattern)?;
            let _ = writeln!(self.host.output(), "Analysing {} {kind} file(s)", files.len());

            for file in &files {
                log::info!(target: LOG_TARGET, "Processing {kind} report '{file}'");
                aggregator.visit(&load(kind, file)?);
            }
        }

        let snapshot = aggregator.finish();
        let _ = writeln!(self.host.output(), "Produced {} metrics", snapshot.metrics.len());

        Ok(snapshot)
    }

    /// Emit the requested reports for a snapshot
    ///
    /// Console output is shown when asked for explicitly, or when `console_by_default`
    /// is set and no JSON file is being written.
    ///
    /// # Errors
    ///
    /// Returns an error if a report cannot be generated or written
    pub fn report(&mut self, snapshot: &QualitySnapshot, console_by_default: bool) -> Result<()> {
        if self.console || (console_by_default && self.json.is_none()) {
            let use_colors = match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };

            let mut console_output = String::new();
            generate_console(snapshot, use_colors, &mut console_output)?;
            let _ = writeln!(self.host.output());
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &self.json {
            let mut json_output = String::new();
            generate_json(snapshot, &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        }

        Ok(())
    }
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when commands run more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
