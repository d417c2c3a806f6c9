//! # folio-charts
//!
//! Hand-rolled SVG charting for the Portfolio Analytics Dashboard.
//! Turns numeric series into render-ready geometry and renders it with Leptos.
//!
//! ## Architecture
//!
//! Geometry is computed by pure functions and recomputed on every render:
//! - Domain normalization (min, max, non-zero span)
//! - Coordinate mapping onto a fixed logical canvas
//! - Line and area path construction
//! - Proportional bar heights with a visible floor
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, formatters
//! - `domain` - Value range of a series
//! - `mapper` - (index, value) to canvas point
//! - `line` - Line/area geometry and the `LineChart` component
//! - `bar` - Bar geometry and the `BarChart` component

pub mod bar;
pub mod chartkit;
pub mod domain;
pub mod line;
pub mod mapper;

pub use bar::*;
pub use chartkit::*;
pub use domain::*;
pub use line::*;
pub use mapper::*;

// Re-export palettes and colors from folio-core for convenience
pub use folio_core::{colors, palette, Palette};

/// Placeholder text for a series without entries
pub const NO_DATA_TEXT: &str = "No data available";

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Line chart margins: headroom on top, plot runs down to the canvas edge
    pub const fn plot() -> Self {
        Self::new(40.0, 40.0, 0.0, 40.0)
    }

    /// Bar chart margins: room for value labels above, symbols below
    pub const fn bars() -> Self {
        Self::new(30.0, 20.0, 30.0, 20.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::plot()
    }
}

/// Logical canvas: SVG viewBox size plus margins around the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Canvas of the performance line chart (800 x 300)
    pub fn performance() -> Self {
        Self::new(800.0, 300.0).with_margin(ChartMargin::plot())
    }

    /// Canvas of the bar charts (800 x 300)
    pub fn bars() -> Self {
        Self::new(800.0, 300.0).with_margin(ChartMargin::bars())
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Y of the plot baseline (bottom edge of the plot area)
    pub fn baseline(&self) -> f64 {
        self.margin.top + self.inner_height()
    }

    /// X of the right edge of the plot area
    pub fn right_edge(&self) -> f64 {
        self.margin.left + self.inner_width()
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::performance()
    }
}
