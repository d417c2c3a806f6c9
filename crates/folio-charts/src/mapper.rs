//! Maps series entries onto the logical chart canvas

use crate::{chartkit::Point, domain::Domain, ChartDimensions};
use folio_core::Series;

/// Maps `(index, value)` pairs of a series with `count` entries to canvas
/// points.
///
/// x spreads indices evenly across the inner width; a single entry sits at
/// the horizontal center. y grows downwards, so `max` maps to the top of the
/// plot area and `min` to its baseline. Values outside the domain are not
/// clamped.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    dims: ChartDimensions,
    domain: Domain,
    count: usize,
}

impl CoordinateMapper {
    pub fn new(dims: ChartDimensions, domain: Domain, count: usize) -> Self {
        Self { dims, domain, count }
    }

    pub fn x(&self, index: usize) -> f64 {
        let left = self.dims.margin.left;
        let width = self.dims.inner_width();

        if self.count <= 1 {
            return left + width / 2.0;
        }

        let divisor = (self.count - 1).max(1) as f64;
        left + index as f64 / divisor * width
    }

    pub fn y(&self, value: f64) -> f64 {
        self.dims.margin.top + (1.0 - self.domain.normalize(value)) * self.dims.inner_height()
    }

    pub fn map(&self, index: usize, value: f64) -> Point {
        Point::new(self.x(index), self.y(value))
    }

    pub fn dimensions(&self) -> &ChartDimensions {
        &self.dims
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}

/// One point per entry, in series order
pub fn map_series(series: &Series, domain: &Domain, dims: &ChartDimensions) -> Vec<Point> {
    let mapper = CoordinateMapper::new(*dims, *domain, series.len());
    series
        .values()
        .enumerate()
        .map(|(i, v)| mapper.map(i, v))
        .collect()
}
