//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the analytics pipeline.

pub mod report;

pub use report::{
    handle_chart_command, handle_report_command, ChartArgs, ExportFormat, PeriodArgs, ReportArgs,
};
