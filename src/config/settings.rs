//! User settings for Spendlens
//!
//! Manages display preferences, the period shown when none is given, and
//! extra category colors layered over the built-in palette.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

use super::paths::SpendlensPaths;
use crate::error::SpendlensError;
use crate::models::{Color, PeriodSelection};
use crate::reports::CategoryPalette;

/// Preset period used when the user does not pick one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultPeriod {
    Weekly,
    #[default]
    Monthly,
    Annually,
}

impl DefaultPeriod {
    /// The period selection this preference stands for
    pub fn to_selection(self) -> PeriodSelection {
        match self {
            Self::Weekly => PeriodSelection::Weekly,
            Self::Monthly => PeriodSelection::Monthly,
            Self::Annually => PeriodSelection::Annually,
        }
    }
}

/// User settings for Spendlens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Period used when none is given on the command line
    #[serde(default)]
    pub default_period: DefaultPeriod,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Category colors added to (or replacing) the built-in palette
    #[serde(default)]
    pub category_colors: BTreeMap<String, Color>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_period: DefaultPeriod::default(),
            date_format: default_date_format(),
            category_colors: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Build the category palette these settings describe
    pub fn palette(&self) -> CategoryPalette {
        CategoryPalette::standard().with_overrides(
            self.category_colors
                .iter()
                .map(|(name, color)| (name.clone(), *color)),
        )
    }

    /// Format a date with the configured format, falling back to ISO dates
    /// when the format cannot render a date
    pub fn format_date(&self, date: NaiveDate) -> String {
        render_date(date, &self.date_format).unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
    }

    /// Check that every configured value is usable
    pub fn validate(&self) -> Result<(), SpendlensError> {
        if render_date(NaiveDate::MIN, &self.date_format).is_none() {
            return Err(SpendlensError::Config(format!(
                "Invalid date format '{}': it must format a calendar date",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendlensPaths) -> Result<Self, SpendlensError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendlensError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendlensError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendlensPaths) -> Result<(), SpendlensError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendlensError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SpendlensError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

/// Render `date` with a strftime format; `None` when the format is invalid or
/// asks for fields a date does not have
fn render_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}
