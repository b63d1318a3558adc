//! Pie chart geometry
//!
//! Converts a category breakdown into circular sectors on the unit circle.
//! Rendering is left to the caller; [`PieSector::svg_path`] gives the path
//! data for an SVG `viewBox="-1 -1 2 2"`.

use serde::Serialize;
use std::f64::consts::{PI, TAU};

use crate::models::Color;
use crate::reports::palette::PLACEHOLDER_COLOR;
use crate::reports::summary::CategoryShare;

/// One slice of the pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSector {
    /// Category this slice represents; `None` only for the placeholder
    pub category: Option<String>,
    /// Start angle in radians, within `[0, 2π]`
    pub start_angle: f64,
    /// End angle in radians, within `[start_angle, 2π]`
    pub end_angle: f64,
    /// Whether the slice covers more than half the circle
    pub large_arc: bool,
    /// Fill color
    pub color: Color,
}

impl PieSector {
    /// The neutral full-circle sector drawn when there is nothing to chart
    pub fn placeholder() -> Self {
        Self {
            category: None,
            start_angle: 0.0,
            end_angle: TAU,
            large_arc: true,
            color: PLACEHOLDER_COLOR,
        }
    }

    /// Check if this is the empty-chart placeholder
    pub fn is_placeholder(&self) -> bool {
        self.category.is_none()
    }

    /// Angle covered by the slice
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG path data for the slice on the unit circle, centered at the origin
    ///
    /// A slice spanning the whole circle is drawn as two half arcs, since a
    /// single arc with identical endpoints renders as nothing.
    pub fn svg_path(&self) -> String {
        let (x1, y1) = point_at(self.start_angle);
        let (x2, y2) = point_at(self.end_angle);

        if self.sweep() >= TAU - 1e-9 {
            let (xm, ym) = point_at(self.start_angle + PI);
            return format!(
                "M 0 0 L {x1} {y1} A 1 1 0 1 1 {xm} {ym} A 1 1 0 1 1 {x1} {y1} Z"
            );
        }

        let large = u8::from(self.large_arc);
        format!("M 0 0 L {x1} {y1} A 1 1 0 {large} 1 {x2} {y2} Z")
    }
}

/// Build one sector per category, in the same order
///
/// Angles follow the running total of the rounded percentages. The running
/// total is clamped at 100 so rounding drift never pushes an angle past 2π.
/// An empty breakdown yields a single [`PieSector::placeholder`].
pub fn pie_sectors(categories: &[CategoryShare]) -> Vec<PieSector> {
    if categories.is_empty() {
        return vec![PieSector::placeholder()];
    }

    let mut cumulative: u32 = 0;
    categories
        .iter()
        .map(|share| {
            let start_angle = angle_for(cumulative);
            cumulative += u32::from(share.percent);
            PieSector {
                category: Some(share.category.clone()),
                start_angle,
                end_angle: angle_for(cumulative),
                large_arc: share.percent > 50,
                color: share.color,
            }
        })
        .collect()
}

fn angle_for(cumulative_percent: u32) -> f64 {
    f64::from(cumulative_percent.min(100)) / 100.0 * TAU
}

fn point_at(angle: f64) -> (String, String) {
    (coordinate(angle.cos()), coordinate(angle.sin()))
}

fn coordinate(value: f64) -> String {
    // Avoid printing "-0.000000" for values that are zero up to float noise
    let value = if value.abs() < 5e-7 { 0.0 } else { value };
    format!("{value:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    const EPSILON: f64 = 1e-12;

    fn share(category: &str, percent: u8) -> CategoryShare {
        CategoryShare {
            category: category.to_string(),
            amount: Money::from_cents(i64::from(percent)),
            percent,
            color: Color::from_hex(0x3b82f6),
        }
    }

    #[test]
    fn test_two_sectors() {
        let sectors = pie_sectors(&[share("Rent", 70), share("Food", 30)]);

        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].start_angle, 0.0);
        assert!((sectors[0].end_angle - 1.4 * PI).abs() < EPSILON);
        assert!((sectors[1].start_angle - 1.4 * PI).abs() < EPSILON);
        assert!((sectors[1].end_angle - TAU).abs() < EPSILON);
        assert!(sectors[0].large_arc);
        assert!(!sectors[1].large_arc);
        assert_eq!(sectors[0].category.as_deref(), Some("Rent"));
    }

    #[test]
    fn test_empty_breakdown_yields_placeholder() {
        let sectors = pie_sectors(&[]);

        assert_eq!(sectors.len(), 1);
        assert!(sectors[0].is_placeholder());
        assert_eq!(sectors[0].color, PLACEHOLDER_COLOR);
        assert_eq!(sectors[0].start_angle, 0.0);
        assert_eq!(sectors[0].end_angle, TAU);
    }

    #[test]
    fn test_exactly_half_is_not_large() {
        let sectors = pie_sectors(&[share("A", 50), share("B", 50)]);
        assert!(!sectors[0].large_arc);
        assert!(!sectors[1].large_arc);
        assert_eq!(sectors[1].end_angle, TAU);
    }

    #[test]
    fn test_angles_are_contiguous_and_non_decreasing() {
        let sectors = pie_sectors(&[share("A", 40), share("B", 33), share("C", 0), share("D", 26)]);

        assert_eq!(sectors[0].start_angle, 0.0);
        for pair in sectors.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        for sector in &sectors {
            assert!(sector.start_angle <= sector.end_angle);
        }
        // 99% charted, so the last sector stops short of the full circle
        assert!((sectors[3].end_angle - 0.99 * TAU).abs() < EPSILON);
        assert_eq!(sectors[2].sweep(), 0.0);
    }

    #[test]
    fn test_upward_drift_is_clamped() {
        let sectors = pie_sectors(&[share("A", 51), share("B", 50)]);
        assert_eq!(sectors[1].end_angle, TAU);
        assert!(sectors.iter().all(|s| s.end_angle <= TAU));
    }

    #[test]
    fn test_svg_path_quarter() {
        let sectors = pie_sectors(&[share("A", 25), share("B", 75)]);

        assert_eq!(
            sectors[0].svg_path(),
            "M 0 0 L 1.000000 0.000000 A 1 1 0 0 1 0.000000 1.000000 Z"
        );
        assert_eq!(
            sectors[1].svg_path(),
            "M 0 0 L 0.000000 1.000000 A 1 1 0 1 1 1.000000 0.000000 Z"
        );
    }

    #[test]
    fn test_svg_path_full_circle() {
        let path = PieSector::placeholder().svg_path();
        assert_eq!(
            path,
            "M 0 0 L 1.000000 0.000000 A 1 1 0 1 1 -1.000000 0.000000 A 1 1 0 1 1 1.000000 0.000000 Z"
        );
    }
}
