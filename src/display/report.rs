//! Report formatting for terminal output
//!
//! Renders an analytics report as the text equivalent of the analytics
//! screen: balance cards, the expense gauge, and the category list.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::reports::AnalyticsReport;

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 22;

/// Format the totals and category breakdown of a report
pub fn format_summary(report: &AnalyticsReport, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let summary = &report.summary;
    let mut output = String::new();

    output.push_str(&format!(
        "Analytics: {} ({} to {})\n",
        report.period,
        settings.format_date(report.interval.start()),
        settings.format_date(report.interval.end())
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<10}{:>16}\n",
        "Balance",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<10}{:>16}\n",
        "Income",
        summary.income_total.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<10}{:>16}\n\n",
        "Expense",
        summary.expense_total.format_with_symbol(symbol)
    ));

    let ratio = summary.expense_ratio();
    output.push_str(&format!(
        "Expense ratio {} {}% of income\n\n",
        format_bar(f64::from(ratio), 100.0, BAR_WIDTH),
        ratio
    ));

    output.push_str("Spend distribution\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if summary.categories.is_empty() {
        output.push_str("No data for this period\n");
        return output;
    }

    let largest = summary.categories[0].amount.cents() as f64;
    for share in &summary.categories {
        output.push_str(&format!(
            "{:<width$} {} {:>4}% {:>12}\n",
            truncate(&share.category, CATEGORY_WIDTH),
            format_bar(share.amount.cents() as f64, largest, BAR_WIDTH),
            share.percent,
            share.amount.format_with_symbol(symbol),
            width = CATEGORY_WIDTH
        ));
    }

    output
}

#[derive(Tabled)]
struct SectorRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Large arc")]
    large_arc: bool,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "SVG path")]
    path: String,
}

/// Format the pie chart sectors of a report as a table
pub fn format_sectors(report: &AnalyticsReport) -> String {
    let rows: Vec<SectorRow> = report
        .sectors
        .iter()
        .map(|sector| SectorRow {
            category: sector
                .category
                .clone()
                .unwrap_or_else(|| "(no data)".to_string()),
            start: format!("{:.4}", sector.start_angle),
            end: format!("{:.4}", sector.end_angle),
            large_arc: sector.large_arc,
            color: sector.color.to_string(),
            path: sector.svg_path(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
