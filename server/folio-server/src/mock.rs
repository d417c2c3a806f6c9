//! Mock price history for demo/development

use folio_core::PricePoint;
use rand::Rng;

/// First month of generated histories
const START_YEAR: usize = 2024;

/// Random-walk portfolio value with occasional trend changes
pub struct PriceWalk {
    price: f64,
    volatility: f64,
    trend: f64,
    floor: f64,
}

impl PriceWalk {
    pub fn new(initial_price: f64) -> Self {
        Self {
            price: initial_price,
            volatility: 0.04,
            trend: 0.0,
            floor: initial_price * 0.1,
        }
    }

    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    fn tick<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let drift = self.trend * 0.01;
        let random = rng.gen_range(-1.0..1.0) * self.volatility;

        if rng.gen_bool(0.1) {
            self.trend = rng.gen_range(-1.0..1.0);
        }

        self.price = (self.price * (1.0 + drift + random)).max(self.floor);
        self.price
    }

    /// Monthly history of `points` values; the first is the initial price
    pub fn generate<R: Rng>(&mut self, points: usize, rng: &mut R) -> Vec<PricePoint> {
        (0..points)
            .map(|i| {
                let price = if i == 0 { self.price } else { self.tick(rng) };
                PricePoint::new(month_label(i), price.round())
            })
            .collect()
    }
}

/// `YYYY-MM` label of month `index` counted from January of the start year
pub fn month_label(index: usize) -> String {
    format!("{}-{:02}", START_YEAR + index / 12, index % 12 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label(0), "2024-01");
        assert_eq!(month_label(11), "2024-12");
        assert_eq!(month_label(13), "2025-02");
    }

    #[test]
    fn test_walk_length_and_start() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = PriceWalk::new(10000.0).generate(24, &mut rng);

        assert_eq!(history.len(), 24);
        assert_eq!(history[0].price, 10000.0);
        assert_eq!(history[23].date, "2025-12");
    }

    #[test]
    fn test_walk_stays_above_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        let history = PriceWalk::new(100.0).volatility(0.9).generate(200, &mut rng);

        assert!(history.iter().all(|p| p.price >= 10.0 && p.price.is_finite()));
    }

    #[test]
    fn test_empty_walk() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(PriceWalk::new(100.0).generate(0, &mut rng).is_empty());
    }
}
