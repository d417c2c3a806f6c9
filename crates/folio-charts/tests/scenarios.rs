//! End-to-end geometry scenarios on the sample portfolio

use folio_charts::{
    compute_bar_geometry, compute_domain, compute_line_geometry, map_series, palette,
    ChartDimensions, LineGeometry, MIN_BAR_FRACTION,
};
use folio_core::{PortfolioData, Series};

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

fn price_series() -> Series {
    Series::from_pairs([
        ("Jan", 10000.0),
        ("Feb", 10500.0),
        ("Mar", 11200.0),
        ("Apr", 10800.0),
        ("May", 12000.0),
    ])
    .unwrap()
}

#[test]
fn price_history_domain_and_midpoint() {
    let series = price_series();
    let dims = ChartDimensions::performance();
    let domain = compute_domain(&series);

    assert_eq!((domain.min, domain.max, domain.span), (10000.0, 12000.0, 2000.0));

    let points = map_series(&series, &domain, &dims);
    let mar = points[2];
    assert!(approx(mar.x, dims.margin.left + 0.5 * dims.inner_width(), 1e-9));

    // 11200 is 60% up the range
    assert!(approx(mar.y, 40.0 + 0.4 * 260.0, 1e-9));
}

#[test]
fn points_strictly_increase_in_x() {
    let dims = ChartDimensions::performance();
    for n in 2..12 {
        let series = Series::from_pairs((0..n).map(|i| (i.to_string(), (i * 7 % 5) as f64)))
            .unwrap();
        let points = map_series(&series, &compute_domain(&series), &dims);

        assert_eq!(points.len(), n);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        assert!(points.iter().all(|p| p.y >= dims.margin.top && p.y <= dims.baseline()));
    }
}

#[test]
fn empty_series_yields_placeholder() {
    let series = Series::empty();
    let geometry = compute_line_geometry(
        &series,
        &compute_domain(&series),
        &ChartDimensions::performance(),
    );
    assert_eq!(geometry, LineGeometry::NoData);
}

#[test]
fn allocation_weights_against_shared_max() {
    let series = PortfolioData::sample().allocation_series().unwrap();
    let bars = compute_bar_geometry(&series, Some(30.0), &palette::ALLOCATION);
    let fractions: Vec<f64> = bars.iter().map(|b| b.height_fraction).collect();

    let expected = [0.833, 0.667, 1.0, 0.5, 0.333];
    for (got, want) in fractions.iter().zip(expected) {
        assert!(approx(*got, want, 1e-3), "{got} != {want}");
    }
}

#[test]
fn zero_bar_stays_visible_below_full_height() {
    let series = Series::from_pairs([("zero", 0.0), ("full", 30.0)]).unwrap();
    let bars = compute_bar_geometry(&series, Some(30.0), &palette::RISK);

    assert!(bars[0].height_fraction >= MIN_BAR_FRACTION);
    assert!(bars[0].height_fraction < bars[1].height_fraction);
    assert_eq!(bars[1].height_fraction, 1.0);
}

#[test]
fn replacing_series_recomputes_geometry() {
    let dims = ChartDimensions::performance();
    let first = price_series();
    let second = Series::from_pairs([("Q1", 1.0), ("Q2", 2.0)]).unwrap();

    let a = compute_line_geometry(&first, &compute_domain(&first), &dims);
    let b = compute_line_geometry(&second, &compute_domain(&second), &dims);

    assert_eq!(a.plot().unwrap().points.len(), 5);
    assert_eq!(b.plot().unwrap().points.len(), 2);
    assert_eq!(b.plot().unwrap().points[1].x, dims.right_edge());
}
