//! CSV Export functionality
//!
//! Exports the category breakdown of a report, one row per category plus a
//! closing total row.

use std::io::Write;

use crate::error::{SpendlensError, SpendlensResult};
use crate::reports::AnalyticsReport;

/// Export the category breakdown of a report to CSV
pub fn export_report_csv<W: Write>(report: &AnalyticsReport, writer: &mut W) -> SpendlensResult<()> {
    let mut out = ::csv::Writer::from_writer(writer);
    let start = report.interval.start().to_string();
    let end = report.interval.end().to_string();

    out.write_record(["Start Date", "End Date", "Category", "Amount", "Percent", "Color"])
        .map_err(|e| SpendlensError::Export(e.to_string()))?;

    for share in &report.summary.categories {
        out.write_record(vec![
            start.clone(),
            end.clone(),
            share.category.clone(),
            share.amount.to_string(),
            share.percent.to_string(),
            share.color.to_string(),
        ])
        .map_err(|e| SpendlensError::Export(e.to_string()))?;
    }

    out.write_record(vec![
        start,
        end,
        "TOTAL".to_string(),
        report.summary.expense_total.to_string(),
        report.summary.percent_total().to_string(),
        String::new(),
    ])
    .map_err(|e| SpendlensError::Export(e.to_string()))?;

    out.flush().map_err(|e| SpendlensError::Export(e.to_string()))?;

    Ok(())
}
