use crate::Result;
use crate::metrics::{QualitySnapshot, Severity};
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(snapshot: &QualitySnapshot, use_colors: bool, writer: &mut W) -> Result<()> {
    if snapshot.metrics.is_empty() {
        writeln!(writer, "No metrics produced")?;
        return Ok(());
    }

    if let Some(when) = snapshot.timestamp_utc() {
        let when = when.format("%Y-%m-%d %H:%M:%S UTC").to_string();
        if use_colors {
            writeln!(writer, "{} {when}", "Reports as of".bold())?;
        } else {
            writeln!(writer, "Reports as of {when}")?;
        }
        writeln!(writer)?;
    }

    let max_name_len = snapshot.metrics.iter().map(|m| m.name.len()).max().unwrap_or(0);
    let max_value_len = snapshot.metrics.iter().map(|m| m.formatted_value().len()).max().unwrap_or(0);

    for metric in &snapshot.metrics {
        let status = metric.severity.to_string();
        let status = if use_colors {
            match metric.severity {
                Severity::Ok => status.green().to_string(),
                Severity::Warning => status.yellow().bold().to_string(),
                Severity::Alert => status.red().bold().to_string(),
            }
        } else {
            status
        };

        writeln!(
            writer,
            "  {:<name_width$} : {:>value_width$}  {status}",
            metric.name,
            metric.formatted_value(),
            name_width = max_name_len,
            value_width = max_value_len,
        )?;
    }

    Ok(())
}
