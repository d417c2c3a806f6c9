//! Value range of a series, with a span that is always safe to divide by

use crate::chartkit::nice_ticks;
use folio_core::Series;

/// (min, max, span) of a series. `span` is `max - min`, or 1 when all
/// values are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub span: f64,
}

impl Domain {
    /// Domain of an arbitrary value sequence. Empty input gives
    /// `(0, 0, 1)`; callers check length before asking for geometry.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 0.0));

        let span = max - min;
        let span = if span == 0.0 { 1.0 } else { span };

        Self { min, max, span }
    }

    /// Position of `value` within the domain: 0 at `min`, 1 at `min + span`.
    /// Not clamped.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span
    }

    /// True when the span was substituted (all values equal)
    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }

    /// "Nice" tick values inside `[min, max]` for grid lines and labels
    pub fn value_ticks(&self, count: usize) -> Vec<f64> {
        if self.is_flat() {
            return vec![self.min];
        }
        nice_ticks(self.min, self.max, count)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::from_values(std::iter::empty())
    }
}

/// Domain of a series' values
pub fn compute_domain(series: &Series) -> Domain {
    Domain::from_values(series.values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_of_prices() {
        let domain = Domain::from_values([10000.0, 10500.0, 11200.0, 10800.0, 12000.0]);
        assert_eq!(domain.min, 10000.0);
        assert_eq!(domain.max, 12000.0);
        assert_eq!(domain.span, 2000.0);
        assert!(!domain.is_flat());
    }

    #[test]
    fn test_empty_domain() {
        let domain = Domain::default();
        assert_eq!((domain.min, domain.max, domain.span), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_flat_domain_substitutes_span() {
        let domain = Domain::from_values([7.0, 7.0, 7.0]);
        assert_eq!(domain.span, 1.0);
        assert!(domain.is_flat());
        assert_eq!(domain.normalize(7.0), 0.0);
        assert_eq!(domain.value_ticks(4), vec![7.0]);
    }

    #[test]
    fn test_negative_values() {
        let domain = Domain::from_values([-5.0, 3.0, -1.0]);
        assert_eq!(domain.min, -5.0);
        assert_eq!(domain.max, 3.0);
        assert_eq!(domain.span, 8.0);
        assert_eq!(domain.normalize(-1.0), 0.5);
    }

    #[test]
    fn test_compute_domain_from_series() {
        let series = Series::from_pairs([("a", 2.0), ("b", 4.0)]).unwrap();
        let domain = compute_domain(&series);
        assert_eq!(domain.span, 2.0);
        assert_eq!(domain.value_ticks(4), vec![2.0, 2.5, 3.0, 3.5, 4.0]);
    }

    #[test]
    fn test_ticks_for_values_equal_up_to_rounding() {
        let series = Series::from_pairs([("a", 0.1 + 0.2), ("b", 0.3)]).unwrap();
        let domain = compute_domain(&series);
        assert!(!domain.is_flat());
        assert!(domain.span > 0.0 && domain.span < 1e-15);

        let ticks = domain.value_ticks(4);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| *t >= domain.min && *t <= domain.max));
    }
}
