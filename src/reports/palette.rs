//! Category color palette
//!
//! A fixed lookup from well-known expense category names to colors, with a
//! single shared color for everything else. A palette can be extended with
//! user-configured entries when it is built and is read-only afterwards.

use std::collections::BTreeMap;

use crate::models::Color;

/// Color for categories without an entry in the palette
pub const DEFAULT_CATEGORY_COLOR: Color = Color::from_hex(0x64748b);

/// Neutral fill for the placeholder sector of an empty chart
pub const PLACEHOLDER_COLOR: Color = Color::from_hex(0xf1f5f9);

/// Built-in category colors
pub const STANDARD_CATEGORY_COLORS: [(&str, Color); 4] = [
    ("Food & Drinks", Color::from_hex(0x3b82f6)),
    ("Shopping", Color::from_hex(0x8b5cf6)),
    ("Entertainment", Color::from_hex(0xf59e0b)),
    ("Transport", Color::from_hex(0x10b981)),
];

/// Immutable category → color lookup with an explicit default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPalette {
    colors: BTreeMap<String, Color>,
    default: Color,
}

impl CategoryPalette {
    /// The built-in palette
    pub fn standard() -> Self {
        Self {
            colors: STANDARD_CATEGORY_COLORS
                .iter()
                .map(|(name, color)| (name.to_string(), *color))
                .collect(),
            default: DEFAULT_CATEGORY_COLOR,
        }
    }

    /// Extend the palette; entries for existing names replace the built-in color
    pub fn with_overrides<I, S>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, Color)>,
        S: Into<String>,
    {
        self.colors
            .extend(overrides.into_iter().map(|(name, color)| (name.into(), color)));
        self
    }

    /// Color for a category name (exact, case-sensitive match)
    pub fn color_for(&self, category: &str) -> Color {
        self.colors.get(category).copied().unwrap_or(self.default)
    }

    /// Color used for unrecognized categories
    pub fn default_color(&self) -> Color {
        self.default
    }

    /// Number of named entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no named entries
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::standard()
    }
}
