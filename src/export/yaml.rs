//! YAML Export functionality
//!
//! Exports an analytics report in a human-readable form.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::{SpendlensError, SpendlensResult};
use crate::export::json::ReportExport;
use crate::reports::AnalyticsReport;

/// Export a report as YAML
pub fn export_report_yaml<W: Write>(
    report: &AnalyticsReport,
    reference_date: NaiveDate,
    writer: &mut W,
) -> SpendlensResult<()> {
    let export = ReportExport::new(report, reference_date);

    writeln!(writer, "# Spendlens analytics report")
        .map_err(|e| SpendlensError::Export(e.to_string()))?;
    writeln!(writer, "# Period: {} ({})", report.period, report.interval)
        .map_err(|e| SpendlensError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendlensError::Export(e.to_string()))?;

    Ok(())
}
