use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Aggregate the configured reports and print or save the resulting metrics.
pub fn analyze_reports<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let snapshot = common.collect()?;
    common.report(&snapshot, true)
}
