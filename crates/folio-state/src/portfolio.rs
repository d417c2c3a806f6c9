//! Reactive portfolio data, replaced as a whole on every load

use crate::Tab;
use chrono::{DateTime, Utc};
use folio_core::{PortfolioData, PortfolioSummary, Series};
use leptos::prelude::*;

/// Data of the last successful load
#[derive(Clone, Copy)]
pub struct PortfolioState {
    /// All four categories
    pub data: RwSignal<PortfolioData>,
    /// Time the data was applied
    pub loaded_at: RwSignal<Option<DateTime<Utc>>>,
}

impl PortfolioState {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(PortfolioData::default()),
            loaded_at: RwSignal::new(None),
        }
    }

    /// Swap in a freshly loaded portfolio
    pub fn replace(&self, data: PortfolioData) {
        tracing::debug!(
            prices = data.prices.len(),
            weights = data.weights.len(),
            risk = data.risk.len(),
            optimization = data.optimization.len(),
            "portfolio data replaced"
        );
        self.data.set(data);
        self.loaded_at.set(Some(Utc::now()));
    }

    /// Series charted by `tab`. Invalid data renders as the empty state.
    pub fn series_for(&self, tab: Tab) -> Series {
        self.data.with(|data| series_for(data, tab))
    }

    pub fn summary(&self) -> PortfolioSummary {
        self.data.with(|data| data.summary())
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

/// Project the records of `tab` into a series
pub fn series_for(data: &PortfolioData, tab: Tab) -> Series {
    let result = match tab {
        Tab::Performance => data.performance_series(),
        Tab::Allocation => data.allocation_series(),
        Tab::Risk => data.risk_series(),
        Tab::Optimization => data.optimization_series(),
    };

    result.unwrap_or_else(|e| {
        tracing::warn!(tab = tab.id(), "invalid series: {}", e);
        Series::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::RiskRecord;

    #[test]
    fn test_series_for_each_tab() {
        let data = PortfolioData::sample();

        assert_eq!(series_for(&data, Tab::Performance).len(), 5);
        assert_eq!(
            series_for(&data, Tab::Optimization).first().map(|e| e.value),
            Some(28.0)
        );
        assert_eq!(
            series_for(&data, Tab::Risk).labels().last(),
            Some("TSLA")
        );
    }

    #[test]
    fn test_invalid_series_is_empty() {
        let mut data = PortfolioData::sample();
        data.risk.push(RiskRecord::new("BAD", f64::INFINITY));

        assert!(series_for(&data, Tab::Risk).is_empty());
        assert_eq!(series_for(&data, Tab::Allocation).len(), 5);
    }
}
