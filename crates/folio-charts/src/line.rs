//! Line chart geometry and component
//!
//! Straight segments through every mapped point, plus a closed area outline
//! dropped onto the plot baseline for the gradient fill.

use crate::{
    chartkit::{closed_path, format_axis_value, line_path, Point},
    colors,
    domain::{compute_domain, Domain},
    mapper::{map_series, CoordinateMapper},
    palette::PERFORMANCE_LINE,
    ChartDimensions, NO_DATA_TEXT,
};
use folio_core::Series;
use leptos::prelude::*;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Drawable line chart, or the sentinel for a series without entries
#[derive(Debug, Clone, PartialEq)]
pub enum LineGeometry {
    /// Nothing to draw; render the placeholder instead
    NoData,
    Plotted(LinePlot),
}

/// Points of a non-empty series and the closed area outline under them
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    /// One point per entry, in series order
    pub points: Vec<Point>,
    /// `points` followed by the bottom-right and bottom-left baseline corners
    pub outline: Vec<Point>,
}

impl LineGeometry {
    /// Build from already-mapped points
    pub fn from_points(points: Vec<Point>, dims: &ChartDimensions) -> Self {
        if points.is_empty() {
            return Self::NoData;
        }

        let baseline = dims.baseline();
        let mut outline = Vec::with_capacity(points.len() + 2);
        outline.extend_from_slice(&points);
        outline.push(Point::new(dims.right_edge(), baseline));
        outline.push(Point::new(dims.margin.left, baseline));

        Self::Plotted(LinePlot { points, outline })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData)
    }

    pub fn plot(&self) -> Option<&LinePlot> {
        match self {
            Self::NoData => None,
            Self::Plotted(plot) => Some(plot),
        }
    }
}

impl LinePlot {
    /// Open polyline `M..L..L..`
    pub fn line_path(&self) -> String {
        line_path(&self.points)
    }

    /// Closed area path `M..L..L(br)L(bl)Z`
    pub fn area_path(&self) -> String {
        closed_path(&self.outline)
    }
}

/// Line geometry of `series` on `dims`
pub fn compute_line_geometry(
    series: &Series,
    domain: &Domain,
    dims: &ChartDimensions,
) -> LineGeometry {
    if series.is_empty() {
        tracing::trace!("line geometry requested for empty series");
        return LineGeometry::NoData;
    }

    LineGeometry::from_points(map_series(series, domain, dims), dims)
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Line chart configuration
#[derive(Debug, Clone)]
pub struct LineChartConfig {
    pub dims: ChartDimensions,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub point_radius: f64,
    pub grid_lines: usize,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            dims: ChartDimensions::performance(),
            stroke: PERFORMANCE_LINE,
            stroke_width: 3.0,
            point_radius: 6.0,
            grid_lines: 4,
        }
    }
}

/// Everything the SVG needs for one render
#[derive(Clone)]
struct LineState {
    plot: LinePlot,
    labels: Vec<String>,
    ticks: Vec<(f64, String)>,
}

/// Performance line chart component
#[component]
pub fn LineChart(
    #[prop(into)] series: Signal<Series>,
    #[prop(optional)] config: Option<LineChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = config.dims;
    let stroke = config.stroke;
    let stroke_w = config.stroke_width;
    let point_r = config.point_radius;
    let grid_lines = config.grid_lines;

    // Recomputed from the current series on every change
    let chart_state = move || {
        series.with(|s| {
            let domain = compute_domain(s);
            let LineGeometry::Plotted(plot) = compute_line_geometry(s, &domain, &dims) else {
                return None;
            };

            let mapper = CoordinateMapper::new(dims, domain, s.len());
            let ticks = domain
                .value_ticks(grid_lines)
                .into_iter()
                .map(|v| (mapper.y(v), format_axis_value(v)))
                .collect();

            Some(LineState {
                plot,
                labels: s.labels().map(String::from).collect(),
                ticks,
            })
        })
    };

    view! {
        <div class="line-chart">
            {move || match chart_state() {
                None => view! { <div class="chart-empty">{NO_DATA_TEXT}</div> }.into_any(),
                Some(state) => {
                    let line = state.plot.line_path();
                    let area = state.plot.area_path();

                    view! {
                        <svg
                            viewBox=dims.viewbox()
                            preserveAspectRatio="xMidYMid meet"
                            style="width: 100%; height: 100%;"
                        >
                            <defs>
                                <linearGradient id="lineGradient" x1="0%" y1="0%" x2="0%" y2="100%">
                                    <stop offset="0%" stop-color=colors::accent_alpha(0.3) />
                                    <stop offset="100%" stop-color=colors::accent_alpha(0.0) />
                                </linearGradient>
                            </defs>

                            // Grid lines with value labels
                            {state.ticks.into_iter().map(|(y, label)| {
                                view! {
                                    <g class="grid-line">
                                        <line
                                            x1=dims.margin.left y1=y
                                            x2=dims.right_edge() y2=y
                                            stroke=colors::GRID
                                            stroke-width="1"
                                        />
                                        <text
                                            x=dims.margin.left - 6.0
                                            y=y
                                            dy="0.32em"
                                            text-anchor="end"
                                            fill=colors::TEXT_MUTED
                                            font-size="10"
                                        >
                                            {label}
                                        </text>
                                    </g>
                                }
                            }).collect_view()}

                            // Area under the line
                            <path d=area fill="url(#lineGradient)" />

                            // Line
                            <path
                                d=line
                                fill="none"
                                stroke=stroke
                                stroke-width=stroke_w
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />

                            // Points and x-axis labels
                            {state.plot.points.iter().zip(state.labels).map(|(p, label)| {
                                view! {
                                    <g class="line-point">
                                        <circle
                                            cx=p.x
                                            cy=p.y
                                            r=point_r
                                            fill=colors::BG_ELEVATED
                                            stroke=stroke
                                            stroke-width="2"
                                        />
                                        <text
                                            x=p.x
                                            y=dims.baseline() - 10.0
                                            text-anchor="middle"
                                            fill=colors::TEXT_MUTED
                                            font-size="11"
                                            font-weight="500"
                                        >
                                            {label}
                                        </text>
                                    </g>
                                }
                            }).collect_view()}
                        </svg>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_is_no_data() {
        let dims = ChartDimensions::performance();
        let series = Series::empty();
        let geometry = compute_line_geometry(&series, &compute_domain(&series), &dims);

        assert_eq!(geometry, LineGeometry::NoData);
        assert!(geometry.plot().is_none());
    }

    #[test]
    fn test_outline_appends_baseline_corners() {
        let dims = ChartDimensions::performance();
        let series = Series::from_pairs([("a", 1.0), ("b", 3.0), ("c", 2.0)]).unwrap();
        let geometry = compute_line_geometry(&series, &compute_domain(&series), &dims);
        let plot = geometry.plot().unwrap();

        assert_eq!(plot.points.len(), 3);
        assert_eq!(plot.outline.len(), 5);
        assert_eq!(&plot.outline[..3], &plot.points[..]);
        assert_eq!(plot.outline[3], Point::new(760.0, 300.0));
        assert_eq!(plot.outline[4], Point::new(40.0, 300.0));
    }

    #[test]
    fn test_paths() {
        let dims = ChartDimensions::performance();
        let series = Series::from_pairs([("a", 0.0), ("b", 10.0)]).unwrap();
        let geometry = compute_line_geometry(&series, &compute_domain(&series), &dims);
        let plot = geometry.plot().unwrap();

        assert_eq!(plot.line_path(), "M40.00,300.00L760.00,40.00");
        assert_eq!(
            plot.area_path(),
            "M40.00,300.00L760.00,40.00L760.00,300.00L40.00,300.00Z"
        );
    }

    #[test]
    fn test_from_points_empty() {
        let geometry = LineGeometry::from_points(Vec::new(), &ChartDimensions::performance());
        assert!(geometry.is_empty());
    }
}
