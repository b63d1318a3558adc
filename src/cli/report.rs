//! CLI commands for analytics reports
//!
//! `report` prints or exports the period summary, `chart` prints the pie
//! chart sectors.

use crate::config::{Settings, SpendlensPaths};
use crate::display::{format_sectors, format_summary};
use crate::error::{SpendlensError, SpendlensResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml};
use crate::models::PeriodSelection;
use crate::reports::AnalyticsReport;
use crate::storage::TransactionFile;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Text summary for the terminal
    #[default]
    Table,
    /// CSV format (category breakdown only)
    Csv,
    /// JSON format (full report)
    Json,
    /// YAML format (full report, human-readable)
    Yaml,
}

/// Where transactions come from and which period to look at
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Transaction file (defaults to the data directory's transactions.json)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Period: weekly, monthly, annually, or START..END (YYYY-MM-DD)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Custom start date (YYYY-MM-DD); the range ends at --end or the reference date
    #[arg(short, long)]
    pub start: Option<String>,

    /// Custom end date (YYYY-MM-DD), requires --start
    #[arg(short, long)]
    pub end: Option<String>,

    /// Reference date the period is resolved against (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments of the `report` command
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub period: PeriodArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show top N categories only (table format)
    #[arg(long)]
    pub top: Option<usize>,
}

/// Arguments of the `chart` command
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub period: PeriodArgs,
}

/// Handle the `report` command
///
/// `today` is the reference date used when `--today` is not given.
pub fn handle_report_command(
    paths: &SpendlensPaths,
    settings: &Settings,
    args: ReportArgs,
    today: NaiveDate,
) -> SpendlensResult<()> {
    let (report, reference_date) = build_report(paths, settings, &args.period, today)?;

    if let Some(path) = &args.output {
        let file = File::create(path).map_err(|e| {
            SpendlensError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        write_report(&mut writer, &report, reference_date, settings, args.format, args.top)?;
        writer
            .flush()
            .map_err(|e| SpendlensError::Export(e.to_string()))?;
        println!("Report exported to: {}", path.display());
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_report(&mut writer, &report, reference_date, settings, args.format, args.top)?;
    }

    Ok(())
}

/// Handle the `chart` command
pub fn handle_chart_command(
    paths: &SpendlensPaths,
    settings: &Settings,
    args: ChartArgs,
    today: NaiveDate,
) -> SpendlensResult<()> {
    let (report, _) = build_report(paths, settings, &args.period, today)?;

    println!("Pie chart: {} ({})", report.period, report.interval);
    println!("{}", format_sectors(&report));

    Ok(())
}

fn write_report<W: Write>(
    writer: &mut W,
    report: &AnalyticsReport,
    reference_date: NaiveDate,
    settings: &Settings,
    format: ExportFormat,
    top: Option<usize>,
) -> SpendlensResult<()> {
    if top == Some(0) {
        return Err(SpendlensError::Validation("--top must be at least 1".into()));
    }

    match format {
        ExportFormat::Table => {
            let text = match top {
                Some(n) => {
                    let mut trimmed = report.clone();
                    trimmed.summary.categories = report.summary.top_categories(n).to_vec();
                    format_summary(&trimmed, settings)
                }
                None => format_summary(report, settings),
            };
            write!(writer, "{}", text).map_err(|e| SpendlensError::Export(e.to_string()))
        }
        ExportFormat::Csv => export_report_csv(report, writer),
        ExportFormat::Json => export_report_json(report, reference_date, writer),
        ExportFormat::Yaml => export_report_yaml(report, reference_date, writer),
    }
}

/// Load transactions and run the analytics pipeline for the requested period
fn build_report(
    paths: &SpendlensPaths,
    settings: &Settings,
    args: &PeriodArgs,
    today: NaiveDate,
) -> SpendlensResult<(AnalyticsReport, NaiveDate)> {
    let reference_date = match &args.today {
        Some(s) => parse_date(s, "reference")?,
        None => today,
    };
    let selection = resolve_selection(args, settings, reference_date)?;

    let file = TransactionFile::new(
        args.file
            .clone()
            .unwrap_or_else(|| paths.transactions_file()),
    );
    let transactions = file.load()?;

    let report =
        AnalyticsReport::generate(&transactions, reference_date, &selection, &settings.palette())?;
    Ok((report, reference_date))
}

/// Work out the period selection from the command line, falling back to settings
///
/// A `--start` without `--end` runs through `reference_date`.
pub fn resolve_selection(
    args: &PeriodArgs,
    settings: &Settings,
    reference_date: NaiveDate,
) -> SpendlensResult<PeriodSelection> {
    match (&args.start, &args.end) {
        (Some(start), end) => {
            if let Some(period) = &args.period {
                tracing::warn!(%period, "--start given, ignoring --period");
            }
            let end = match end {
                Some(end) => parse_date(end, "end")?,
                None => reference_date,
            };
            Ok(PeriodSelection::custom(parse_date(start, "start")?, end))
        }
        (None, Some(_)) => Err(SpendlensError::Validation(
            "--end requires --start".into(),
        )),
        (None, None) => match &args.period {
            Some(period) => PeriodSelection::parse(period).map_err(|e| {
                SpendlensError::Validation(format!(
                    "Invalid period: {}. Use weekly, monthly, annually or YYYY-MM-DD..YYYY-MM-DD",
                    e
                ))
            }),
            None => Ok(settings.default_period.to_selection()),
        },
    }
}

fn parse_date(s: &str, label: &str) -> SpendlensResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        SpendlensError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            label, s
        ))
    })
}
