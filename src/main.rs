use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendlens::cli::{handle_chart_command, handle_report_command, ChartArgs, ReportArgs};
use spendlens::config::{Settings, SpendlensPaths};
use spendlens::storage::TransactionFile;

#[derive(Parser)]
#[command(
    name = "spendlens",
    version,
    about = "Spending analytics for your transactions",
    long_about = "Spendlens summarizes income and expense transactions for a week, \
                  month, year or custom date range: totals, a per-category \
                  breakdown, and the pie chart that goes with it."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the analytics summary for a period
    Report(ReportArgs),

    /// Show the pie chart sectors for a period
    Chart(ChartArgs),

    /// Create the data directory, settings and an empty transaction file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    let paths = SpendlensPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&paths, &settings, args, today)?;
        }
        Some(Commands::Chart(args)) => {
            handle_chart_command(&paths, &settings, args, today)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Spendlens at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let file = TransactionFile::new(paths.transactions_file());
            if file.initialize()? {
                println!("Created empty transaction file: {}", file.path().display());
            } else {
                println!("Keeping existing transaction file: {}", file.path().display());
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Spendlens Configuration");
            println!("=======================");
            println!("Config file:       {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default period:  {}", settings.default_period.to_selection());
            println!("  Date format:     {}", settings.date_format);
            for (category, color) in &settings.category_colors {
                println!("  Color override:  {} = {}", category, color);
            }
        }
        None => {
            println!("Spendlens - spending analytics for your transactions");
            println!();
            println!("Run 'spendlens --help' for usage information.");
            println!("Run 'spendlens report' to see this month's summary.");
        }
    }

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
