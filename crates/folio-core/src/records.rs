//! Wire records served by the four data endpoints

use crate::SeriesSource;
use serde::{Deserialize, Serialize};

// ============================================================================
// DATA CATEGORIES
// ============================================================================

/// The four data categories loaded when the dashboard opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataCategory {
    Performance,
    Allocation,
    Risk,
    Optimization,
}

impl DataCategory {
    pub fn all() -> &'static [Self] {
        &[
            Self::Performance,
            Self::Allocation,
            Self::Risk,
            Self::Optimization,
        ]
    }

    /// Endpoint path relative to the API base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Performance => "/prices",
            Self::Allocation => "/weights",
            Self::Risk => "/risk",
            Self::Optimization => "/optimization",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Allocation => "allocation",
            Self::Risk => "risk",
            Self::Optimization => "optimization",
        }
    }
}

impl std::fmt::Display for DataCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// PERFORMANCE
// ============================================================================

/// Price history point: `{date, price}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
        }
    }
}

/// Extended performance point: `{date, totalReturn, volatility, sharpe}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPoint {
    pub date: String,
    pub total_return: f64,
    pub volatility: f64,
    pub sharpe: f64,
}

/// Either performance variant; the chart plots `price` or `totalReturn`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerformancePoint {
    Price(PricePoint),
    Return(ReturnPoint),
}

impl PerformancePoint {
    pub fn date(&self) -> &str {
        match self {
            Self::Price(p) => &p.date,
            Self::Return(r) => &r.date,
        }
    }

    /// True for the extended `totalReturn` variant
    pub fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }
}

impl From<PricePoint> for PerformancePoint {
    fn from(p: PricePoint) -> Self {
        Self::Price(p)
    }
}

impl SeriesSource for PerformancePoint {
    fn label(&self) -> &str {
        self.date()
    }

    fn value(&self) -> f64 {
        match self {
            Self::Price(p) => p.price,
            Self::Return(r) => r.total_return,
        }
    }
}

// ============================================================================
// ALLOCATION / RISK / OPTIMIZATION
// ============================================================================

/// Allocation weight in percent: `{symbol, weight, sector?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub symbol: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl WeightRecord {
    pub fn new(symbol: impl Into<String>, weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            weight,
            sector: None,
        }
    }
}

impl SeriesSource for WeightRecord {
    fn label(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> f64 {
        self.weight
    }
}

/// Per-asset risk: `{symbol, volatility | riskContribution, beta?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub symbol: String,
    #[serde(alias = "riskContribution")]
    pub volatility: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
}

impl RiskRecord {
    pub fn new(symbol: impl Into<String>, volatility: f64) -> Self {
        Self {
            symbol: symbol.into(),
            volatility,
            beta: None,
        }
    }
}

impl SeriesSource for RiskRecord {
    fn label(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> f64 {
        self.volatility
    }
}

/// Externally supplied target weight: `{symbol, weight | optimizedWeight, currentWeight?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRecord {
    pub symbol: String,
    #[serde(alias = "optimizedWeight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
}

impl OptimizationRecord {
    pub fn new(symbol: impl Into<String>, weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            weight,
            current_weight: None,
        }
    }

    pub fn with_current(mut self, current: f64) -> Self {
        self.current_weight = Some(current);
        self
    }

    /// Suggested change versus the current weight, in percentage points
    pub fn weight_delta(&self) -> Option<f64> {
        self.current_weight.map(|current| self.weight - current)
    }
}

impl SeriesSource for OptimizationRecord {
    fn label(&self) -> &str {
        &self.symbol
    }

    fn value(&self) -> f64 {
        self.weight
    }
}
