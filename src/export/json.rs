//! JSON Export functionality
//!
//! Exports an analytics report with schema versioning.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::{SpendlensError, SpendlensResult};
use crate::reports::AnalyticsReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report export structure shared by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Date the period was resolved against
    pub reference_date: NaiveDate,

    /// Expenses as a percentage of income, capped at 100
    pub expense_ratio: u8,

    /// The report itself
    pub report: &'a AnalyticsReport,
}

impl<'a> ReportExport<'a> {
    /// Wrap a report for export
    pub fn new(report: &'a AnalyticsReport, reference_date: NaiveDate) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            reference_date,
            expense_ratio: report.summary.expense_ratio(),
            report,
        }
    }
}

/// Export a report as pretty-printed JSON
pub fn export_report_json<W: Write>(
    report: &AnalyticsReport,
    reference_date: NaiveDate,
    writer: &mut W,
) -> SpendlensResult<()> {
    let export = ReportExport::new(report, reference_date);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SpendlensError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendlensError::Export(e.to_string()))?;

    Ok(())
}
