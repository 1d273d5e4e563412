//! Command dispatch logic for quality-publish

use super::{AnalyzeArgs, InitArgs, PublishArgs, analyze_reports, init_config, publish_reports};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "quality-publish", bin_name = "quality-publish", version, author, long_about = None)]
#[command(about = "Aggregate build quality reports and publish them to a dashboard")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate build reports and show the resulting metrics
    Analyze(Box<AnalyzeArgs>),
    /// Aggregate build reports and publish the resulting metrics
    Publish(Box<PublishArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Analyze(analyze_args) => analyze_reports(host, analyze_args),
        Command::Publish(publish_args) => publish_reports(host, publish_args).await,
        Command::Init(init_args) => init_config(host, init_args),
    }
}
