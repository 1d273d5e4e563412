use crate::Result;
use crate::metrics::QualitySnapshot;
use crate::publish::MetricEntry;
use core::fmt::Write;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    timestamp: i64,
    metrics: &'a [MetricEntry],
}

pub fn generate<W: Write>(snapshot: &QualitySnapshot, writer: &mut W) -> Result<()> {
    let metrics: Vec<MetricEntry> = snapshot.metrics.iter().map(MetricEntry::from).collect();
    let report = JsonReport {
        timestamp: snapshot.timestamp,
        metrics: &metrics,
    };

    write!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}
