//! One complete portfolio load and the statistics shown in the summary cards

use crate::{
    OptimizationRecord, PerformancePoint, PricePoint, RiskRecord, Series, SeriesError,
    SeriesSource, WeightRecord,
};
use serde::{Deserialize, Serialize};

/// Data of all four categories from a single load. Replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub prices: Vec<PerformancePoint>,
    pub weights: Vec<WeightRecord>,
    pub risk: Vec<RiskRecord>,
    pub optimization: Vec<OptimizationRecord>,
}

impl PortfolioData {
    /// Sample portfolio used by the demo source and the development server
    pub fn sample() -> Self {
        Self {
            prices: vec![
                PricePoint::new("Jan", 10000.0).into(),
                PricePoint::new("Feb", 10500.0).into(),
                PricePoint::new("Mar", 11200.0).into(),
                PricePoint::new("Apr", 10800.0).into(),
                PricePoint::new("May", 12000.0).into(),
            ],
            weights: vec![
                WeightRecord::new("AAPL", 25.0),
                WeightRecord::new("GOOGL", 20.0),
                WeightRecord::new("MSFT", 30.0),
                WeightRecord::new("AMZN", 15.0),
                WeightRecord::new("TSLA", 10.0),
            ],
            risk: vec![
                RiskRecord::new("AAPL", 15.0),
                RiskRecord::new("GOOGL", 18.0),
                RiskRecord::new("MSFT", 12.0),
                RiskRecord::new("AMZN", 22.0),
                RiskRecord::new("TSLA", 35.0),
            ],
            optimization: vec![
                OptimizationRecord::new("AAPL", 28.0).with_current(25.0),
                OptimizationRecord::new("GOOGL", 22.0).with_current(20.0),
                OptimizationRecord::new("MSFT", 32.0).with_current(30.0),
                OptimizationRecord::new("AMZN", 12.0).with_current(15.0),
                OptimizationRecord::new("TSLA", 6.0).with_current(10.0),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
            && self.weights.is_empty()
            && self.risk.is_empty()
            && self.optimization.is_empty()
    }

    pub fn performance_series(&self) -> Result<Series, SeriesError> {
        Series::from_records(&self.prices)
    }

    pub fn allocation_series(&self) -> Result<Series, SeriesError> {
        Series::from_records(&self.weights)
    }

    pub fn risk_series(&self) -> Result<Series, SeriesError> {
        Series::from_records(&self.risk)
    }

    pub fn optimization_series(&self) -> Result<Series, SeriesError> {
        Series::from_records(&self.optimization)
    }

    /// Check every category projects to a valid series
    pub fn validate(&self) -> Result<(), SeriesError> {
        self.performance_series()?;
        self.allocation_series()?;
        self.risk_series()?;
        self.optimization_series()?;
        Ok(())
    }

    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::from(self)
    }
}

/// What the last performance point measures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadlineKind {
    /// Portfolio value in currency
    #[default]
    Value,
    /// Cumulative return in percent
    Return,
}

/// Figures for the dashboard summary cards
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PortfolioSummary {
    /// Last performance point: a value or, for return histories, the total
    /// return in percent. 0 when empty.
    pub total_value: f64,
    pub headline: HeadlineKind,
    /// Change from first to last value in percent; `None` for return
    /// histories
    pub change_percent: Option<f64>,
    /// Number of allocated assets
    pub asset_count: usize,
    /// Mean volatility across risk records, 0 when empty
    pub avg_volatility: f64,
}

impl PortfolioSummary {
    pub fn is_up(&self) -> bool {
        match self.headline {
            HeadlineKind::Value => self.change_percent.is_none_or(|c| c >= 0.0),
            HeadlineKind::Return => self.total_value >= 0.0,
        }
    }

    /// Format percentage change with sign
    pub fn change_percent_str(&self) -> Option<String> {
        self.change_percent.map(|c| {
            let sign = if c >= 0.0 { "+" } else { "" };
            format!("{}{:.1}%", sign, c)
        })
    }
}

impl From<&PortfolioData> for PortfolioSummary {
    fn from(data: &PortfolioData) -> Self {
        let first = data.prices.first().map(|p| p.value());
        let last = data.prices.last().map(|p| p.value());
        let headline = match data.prices.last() {
            Some(p) if p.is_return() => HeadlineKind::Return,
            _ => HeadlineKind::Value,
        };

        let change_percent = match (headline, first, last) {
            (HeadlineKind::Value, Some(first), Some(last))
                if first != 0.0 && data.prices.len() > 1 =>
            {
                Some((last - first) / first * 100.0)
            }
            _ => None,
        };

        let avg_volatility = if data.risk.is_empty() {
            0.0
        } else {
            data.risk.iter().map(|r| r.volatility).sum::<f64>() / data.risk.len() as f64
        };

        Self {
            total_value: last.unwrap_or(0.0),
            headline,
            change_percent,
            asset_count: data.weights.len(),
            avg_volatility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReturnPoint;

    #[test]
    fn test_sample_summary() {
        let summary = PortfolioData::sample().summary();

        assert_eq!(summary.total_value, 12000.0);
        assert_eq!(summary.headline, HeadlineKind::Value);
        assert_eq!(summary.asset_count, 5);
        assert!((summary.avg_volatility - 20.4).abs() < 1e-9);
        assert!((summary.change_percent.unwrap() - 20.0).abs() < 1e-9);
        assert_eq!(summary.change_percent_str().as_deref(), Some("+20.0%"));
    }

    #[test]
    fn test_return_history_summary() {
        let point = |date: &str, total_return: f64| {
            PerformancePoint::Return(ReturnPoint {
                date: date.into(),
                total_return,
                volatility: 12.0,
                sharpe: 1.1,
            })
        };
        let data = PortfolioData {
            prices: vec![point("Jan", 2.0), point("Feb", 5.0)],
            ..PortfolioData::sample()
        };
        let summary = data.summary();

        assert_eq!(summary.headline, HeadlineKind::Return);
        assert_eq!(summary.total_value, 5.0);
        assert_eq!(summary.change_percent, None);
        assert!(summary.is_up());

        let data = PortfolioData {
            prices: vec![point("Jan", -1.5)],
            ..PortfolioData::default()
        };
        assert!(!data.summary().is_up());
    }

    #[test]
    fn test_empty_summary() {
        let summary = PortfolioData::default().summary();

        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.asset_count, 0);
        assert_eq!(summary.avg_volatility, 0.0);
        assert_eq!(summary.change_percent, None);
    }

    #[test]
    fn test_series_projection() {
        let data = PortfolioData::sample();
        let series = data.allocation_series().unwrap();
        let values: Vec<f64> = series.values().collect();
        assert_eq!(values, vec![25.0, 20.0, 30.0, 15.0, 10.0]);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut data = PortfolioData::sample();
        data.risk.push(RiskRecord::new("BAD", f64::NAN));
        assert!(data.validate().is_err());
    }
}
