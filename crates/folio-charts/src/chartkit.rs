//! # chartkit
//!
//! Core chart primitives: points, band scale, path builders, axis ticks and
//! formatters. Path generation is a strategy trait.

use folio_core::{CompactNumberFormatter, ValueFormatter};
use std::fmt::Write;

/// Upper bound on generated axis ticks
const MAX_TICKS: f64 = 1000.0;

/// Canvas coordinate (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// BAND SCALE (categorical x positions for bars)
// ============================================================================

/// Band scale for categorical data (bar x positions)
#[derive(Debug, Clone)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.clamp(0.0, 1.0);
        self
    }

    /// Width of each bar
    pub fn bandwidth(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        self.step() * (1.0 - self.padding_inner)
    }

    /// Distance between the starts of adjacent bands
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        let n = self.domain_count as f64;
        (r_max - r_min) / (n - self.padding_inner + self.padding_outer * 2.0)
    }

    /// Start position of band `index`
    pub fn scale(&self, index: usize) -> f64 {
        if self.domain_count == 0 {
            return self.range.0;
        }

        let step = self.step();
        self.range.0 + self.padding_outer * step + index as f64 * step
    }

    /// Center position of band `index`
    pub fn scale_center(&self, index: usize) -> f64 {
        self.scale(index) + self.bandwidth() / 2.0
    }
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[Point]) -> String;
}

/// Straight-segment polyline generator
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[Point]) -> String {
        let Some((first, rest)) = points.split_first() else {
            return String::new();
        };

        rest.iter()
            .fold(PathBuilder::new().move_to(first.x, first.y), |path, p| {
                path.line_to(p.x, p.y)
            })
            .build()
    }
}

/// Closed polygon generator (polyline closed back to its first point)
#[derive(Debug, Clone, Default)]
pub struct ClosedPath;

impl PathGenerator for ClosedPath {
    fn generate(&self, points: &[Point]) -> String {
        if points.is_empty() {
            return String::new();
        }

        let mut path = LinePath.generate(points);
        path.push('Z');
        path
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    /// Quadratic curve used for rounded bar corners
    pub fn quadratic_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "Q{:.2},{:.2},{:.2},{:.2}", cx, cy, x, y);
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Generate line path (non-closed)
pub fn line_path(points: &[Point]) -> String {
    LinePath.generate(points)
}

/// Generate closed path through `points`
pub fn closed_path(points: &[Point]) -> String {
    ClosedPath.generate(points)
}

/// Rounded-top bar outline: flat bottom on `baseline`, corners of `radius`
pub fn bar_path(x: f64, width: f64, top: f64, baseline: f64, radius: f64) -> String {
    let r = radius.min(width / 2.0).min((baseline - top).max(0.0));

    let mut builder = PathBuilder::new()
        .move_to(x, baseline)
        .vertical_to(top + r);

    if r > 0.0 {
        builder = builder.quadratic_to(x, top, x + r, top);
    }
    builder = builder.horizontal_to(x + width - r);
    if r > 0.0 {
        builder = builder.quadratic_to(x + width, top, x + width, top + r);
    }

    builder.vertical_to(baseline).close().build()
}

// ============================================================================
// AXIS TICKS
// ============================================================================

/// Round a raw tick interval up to 1, 2 or 5 times a power of ten
fn nice_step(rough: f64) -> f64 {
    let magnitude = 10.0_f64.powf(rough.log10().floor());
    let residual = rough / magnitude;

    if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// "Nice" tick values inside `[min, max]`, roughly `count` intervals apart.
///
/// Ticks are multiples of the step, generated by integer index. Returns
/// `[min]` when the interval is empty or too narrow for the float
/// resolution around it.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let span = max - min;
    if count == 0 || !span.is_finite() || span <= 0.0 {
        return vec![min];
    }

    let step = nice_step(span / count as f64);
    if !step.is_finite() || step <= 0.0 {
        return vec![min];
    }

    let first = (min / step).ceil();
    let last = (max / step).floor();
    if last < first || last - first > MAX_TICKS {
        return vec![min];
    }

    let mut ticks: Vec<f64> = (first as i64..=last as i64)
        .map(|k| k as f64 * step)
        .filter(|tick| (min..=max).contains(tick))
        .collect();
    ticks.dedup();

    if ticks.is_empty() { vec![min] } else { ticks }
}

// ============================================================================
// FORMATTERS
// ============================================================================

/// Format a value for axis labels
pub fn format_axis_value(value: f64) -> String {
    if value.abs() >= 10_000.0 {
        CompactNumberFormatter.format(value)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks_within_domain() {
        let ticks = nice_ticks(10000.0, 12000.0, 4);
        assert_eq!(ticks, vec![10000.0, 10500.0, 11000.0, 11500.0, 12000.0]);

        let ticks = nice_ticks(-3.0, 7.0, 5);
        assert_eq!(ticks, vec![-2.0, 0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_nice_ticks_rounding_width_interval() {
        // Bounds one ulp apart: the step is far below the spacing of floats
        // near 0.3, so stepping by addition would never advance.
        let (min, max) = (0.3, 0.1 + 0.2);
        assert!(max > min);

        let ticks = nice_ticks(min, max, 4);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 5);
        assert!(ticks.iter().all(|t| t.is_finite() && *t >= min && *t <= max));
    }

    #[test]
    fn test_nice_ticks_degenerate_input() {
        assert_eq!(nice_ticks(5.0, 5.0, 4), vec![5.0]);
        assert_eq!(nice_ticks(5.0, 9.0, 0), vec![5.0]);
        assert_eq!(nice_ticks(9.0, 5.0, 4), vec![9.0]);
        assert_eq!(nice_ticks(0.0, f64::INFINITY, 4), vec![0.0]);
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(5).range(0.0, 100.0).padding(0.2, 0.1);
        let bw = scale.bandwidth();
        assert!(bw > 0.0);
        assert!(bw < 20.0);

        // Last band ends inside the range
        assert!(scale.scale(4) + bw <= 100.0 + 1e-9);
        assert!(scale.scale(0) > 0.0);
        assert!(scale.scale_center(1) > scale.scale_center(0));
    }

    #[test]
    fn test_empty_band_scale() {
        let scale = BandScale::new(0).range(10.0, 100.0);
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.scale(3), 10.0);
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .close()
            .build();

        assert_eq!(path, "M0.00,0.00L100.00,100.00Z");
    }

    #[test]
    fn test_line_path_generator() {
        let path = LinePath.generate(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(100.0, 0.0),
        ]);

        assert_eq!(path, "M0.00,0.00L50.00,50.00L100.00,0.00");
        assert_eq!(LinePath.generate(&[]), "");
    }

    #[test]
    fn test_closed_path() {
        let path = closed_path(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(path, "M1.00,2.00L3.00,4.00Z");
        assert_eq!(closed_path(&[]), "");
    }

    #[test]
    fn test_bar_path_is_closed() {
        let path = bar_path(10.0, 20.0, 50.0, 100.0, 4.0);
        assert!(path.starts_with("M10.00,100.00"));
        assert!(path.contains('Q'));
        assert!(path.ends_with("V100.00Z"));
    }

    #[test]
    fn test_format_axis_value() {
        assert_eq!(format_axis_value(11500.0), "11.50K");
        assert_eq!(format_axis_value(25.0), "25");
        assert_eq!(format_axis_value(12.5), "12.5");
    }
}
