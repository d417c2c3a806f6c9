//! Bar chart geometry and component
//!
//! Heights are proportional to a shared maximum with a visible floor, so a
//! zero-valued bar still shows as a sliver instead of looking like missing
//! data.

use crate::{
    chartkit::{bar_path, BandScale},
    colors, ChartDimensions, Palette, NO_DATA_TEXT,
};
use folio_core::{PercentFormatter, Series, ValueFormatter};
use leptos::prelude::*;

/// Smallest height fraction a bar is drawn with
pub const MIN_BAR_FRACTION: f64 = 0.08;

// ============================================================================
// GEOMETRY
// ============================================================================

/// One bar per series entry
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    /// Height relative to the plot height, in `[MIN_BAR_FRACTION, 1]`
    pub height_fraction: f64,
    pub color: &'static str,
}

/// Maximum the bar heights are proportional to. Defaults to the series
/// maximum; a missing or non-positive maximum becomes 1.
pub fn resolve_shared_max(series: &Series, shared_max: Option<f64>) -> f64 {
    let max = shared_max.or_else(|| series.max_value()).unwrap_or(0.0);
    if max > 0.0 && max.is_finite() { max } else { 1.0 }
}

/// `value / shared_max` clamped to `[MIN_BAR_FRACTION, 1]`
pub fn height_fraction(value: f64, shared_max: f64) -> f64 {
    (value / shared_max).clamp(MIN_BAR_FRACTION, 1.0)
}

/// Percent label drawn above a bar: whole values without decimals, others
/// rounded to one decimal
pub fn bar_value_label(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 1 };
    PercentFormatter { decimals }.format(value)
}

/// Bar geometry for every entry of `series`, colored by index
pub fn compute_bar_geometry(
    series: &Series,
    shared_max: Option<f64>,
    palette: &Palette,
) -> Vec<BarGeometry> {
    let max = resolve_shared_max(series, shared_max);

    series
        .iter()
        .enumerate()
        .map(|(i, entry)| BarGeometry {
            label: entry.label.clone(),
            value: entry.value,
            height_fraction: height_fraction(entry.value, max),
            color: palette.color(i),
        })
        .collect()
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    pub dims: ChartDimensions,
    pub corner_radius: f64,
    pub max_bar_width: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            dims: ChartDimensions::bars(),
            corner_radius: 12.0,
            max_bar_width: 96.0,
        }
    }
}

/// Positioned bar ready for SVG
#[derive(Clone)]
struct BarShape {
    bar: BarGeometry,
    x: f64,
    width: f64,
    top: f64,
}

/// Proportional bar chart component
#[component]
pub fn BarChart(
    #[prop(into)] series: Signal<Series>,
    #[prop(optional)] palette: Option<Palette>,
    #[prop(optional)] shared_max: Option<f64>,
    #[prop(optional)] config: Option<BarChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let palette = palette.unwrap_or_default();
    let dims = config.dims;
    let radius = config.corner_radius;
    let max_bar_width = config.max_bar_width;

    let chart_state = move || {
        series.with(|s| {
            let bars = compute_bar_geometry(s, shared_max, &palette);
            if bars.is_empty() {
                return None;
            }

            let x_scale = BandScale::new(bars.len())
                .range(dims.margin.left, dims.right_edge())
                .padding(0.3, 0.15);
            let width = x_scale.bandwidth().min(max_bar_width);
            let plot_height = dims.inner_height();

            let shapes: Vec<BarShape> = bars
                .into_iter()
                .enumerate()
                .map(|(i, bar)| BarShape {
                    x: x_scale.scale_center(i) - width / 2.0,
                    width,
                    top: dims.baseline() - bar.height_fraction * plot_height,
                    bar,
                })
                .collect();

            Some(shapes)
        })
    };

    view! {
        <div class="bar-chart">
            {move || match chart_state() {
                None => view! { <div class="chart-empty">{NO_DATA_TEXT}</div> }.into_any(),
                Some(shapes) => view! {
                    <svg
                        viewBox=dims.viewbox()
                        preserveAspectRatio="xMidYMid meet"
                        style="width: 100%; height: 100%;"
                    >
                        {shapes.into_iter().map(|shape| {
                            let center = shape.x + shape.width / 2.0;
                            let value_label = bar_value_label(shape.bar.value);

                            view! {
                                <g class="bar">
                                    <path
                                        d=bar_path(shape.x, shape.width, shape.top, dims.baseline(), radius)
                                        fill=shape.bar.color
                                    />
                                    <text
                                        x=center
                                        y=shape.top - 8.0
                                        text-anchor="middle"
                                        fill=colors::ACCENT
                                        font-size="12"
                                        font-weight="600"
                                    >
                                        {value_label}
                                    </text>
                                    <text
                                        x=center
                                        y=dims.baseline() + 18.0
                                        text-anchor="middle"
                                        fill=colors::TEXT_MUTED
                                        font-size="12"
                                        font-weight="600"
                                    >
                                        {shape.bar.label.clone()}
                                    </text>
                                </g>
                            }
                        }).collect_view()}
                    </svg>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ALLOCATION, RISK};

    #[test]
    fn test_fractions_against_shared_max() {
        let series =
            Series::from_pairs([("AAPL", 25.0), ("GOOGL", 20.0), ("MSFT", 30.0)]).unwrap();
        let bars = compute_bar_geometry(&series, Some(60.0), &ALLOCATION);

        assert_eq!(bars.len(), 3);
        assert!((bars[0].height_fraction - 25.0 / 60.0).abs() < 1e-9);
        assert!((bars[2].height_fraction - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_defaults_to_series_max() {
        let series = Series::from_pairs([("a", 5.0), ("b", 10.0)]).unwrap();
        let bars = compute_bar_geometry(&series, None, &ALLOCATION);
        assert_eq!(bars[1].height_fraction, 1.0);
        assert_eq!(bars[0].height_fraction, 0.5);
    }

    #[test]
    fn test_all_zero_series() {
        let series = Series::from_pairs([("a", 0.0), ("b", 0.0)]).unwrap();
        assert_eq!(resolve_shared_max(&series, None), 1.0);

        let bars = compute_bar_geometry(&series, None, &ALLOCATION);
        assert!(bars.iter().all(|b| b.height_fraction == MIN_BAR_FRACTION));
    }

    #[test]
    fn test_fraction_bounds() {
        assert_eq!(height_fraction(0.0, 30.0), MIN_BAR_FRACTION);
        assert_eq!(height_fraction(-4.0, 30.0), MIN_BAR_FRACTION);
        assert_eq!(height_fraction(30.0, 30.0), 1.0);
        assert_eq!(height_fraction(45.0, 30.0), 1.0);
    }

    #[test]
    fn test_non_positive_shared_max_replaced() {
        let series = Series::from_pairs([("a", 0.5)]).unwrap();
        assert_eq!(resolve_shared_max(&series, Some(0.0)), 1.0);
        assert_eq!(resolve_shared_max(&series, Some(-3.0)), 1.0);
        assert_eq!(resolve_shared_max(&Series::empty(), None), 1.0);
    }

    #[test]
    fn test_monotonic_in_value() {
        let mut previous = 0.0;
        for step in 0..=40 {
            let fraction = height_fraction(step as f64, 30.0);
            assert!(fraction >= previous);
            previous = fraction;
        }
    }

    #[test]
    fn test_colors_cycle() {
        let series = Series::from_pairs((0..7).map(|i| (format!("s{i}"), i as f64))).unwrap();
        let bars = compute_bar_geometry(&series, None, &RISK);

        assert_eq!(bars[0].color, RISK.color(0));
        assert_eq!(bars[5].color, bars[0].color);
        assert_eq!(bars[6].color, bars[1].color);
    }

    #[test]
    fn test_value_labels_are_rounded() {
        assert_eq!(bar_value_label(25.0), "25%");
        assert_eq!(bar_value_label(100.0 / 3.0), "33.3%");
        assert_eq!(bar_value_label(-2.5), "-2.5%");
        assert_eq!(bar_value_label(0.0), "0%");
    }

    #[test]
    fn test_empty_series_no_bars() {
        assert!(compute_bar_geometry(&Series::empty(), None, &ALLOCATION).is_empty());
    }
}
