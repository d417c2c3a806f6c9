//! Data sources for the four portfolio categories, and the combined load

use crate::{sleep_ms, FetchError, RetryPolicy};
use folio_core::{
    DataCategory, OptimizationRecord, PerformancePoint, PortfolioData, RiskRecord, WeightRecord,
};
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Result of fetching one category
pub type FetchResult<'a, T> = LocalBoxFuture<'a, Result<Vec<T>, FetchError>>;

// ============================================================================
// STRATEGY PATTERN: Data Source
// ============================================================================

/// Strategy trait for where portfolio data comes from
pub trait DataSource {
    fn name(&self) -> &'static str;

    fn fetch_performance(&self) -> FetchResult<'_, PerformancePoint>;

    fn fetch_allocation(&self) -> FetchResult<'_, WeightRecord>;

    fn fetch_risk(&self) -> FetchResult<'_, RiskRecord>;

    fn fetch_optimization(&self) -> FetchResult<'_, OptimizationRecord>;
}

// ============================================================================
// HTTP SOURCE
// ============================================================================

/// JSON endpoints under a base URL: `/prices`, `/weights`, `/risk`,
/// `/optimization`
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, category: DataCategory) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            category.endpoint()
        )
    }

    fn get_json<T: DeserializeOwned + 'static>(&self, category: DataCategory) -> FetchResult<'_, T> {
        let url = self.url_for(category);
        Box::pin(async move {
            tracing::debug!(%url, "fetching {} data", category);

            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Http {
                    category,
                    message: e.to_string(),
                })?;

            if !response.ok() {
                return Err(FetchError::Status {
                    category,
                    status: response.status(),
                });
            }

            let body = response.text().await.map_err(|e| FetchError::Http {
                category,
                message: e.to_string(),
            })?;

            decode(category, &body)
        })
    }
}

impl DataSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_performance(&self) -> FetchResult<'_, PerformancePoint> {
        self.get_json(DataCategory::Performance)
    }

    fn fetch_allocation(&self) -> FetchResult<'_, WeightRecord> {
        self.get_json(DataCategory::Allocation)
    }

    fn fetch_risk(&self) -> FetchResult<'_, RiskRecord> {
        self.get_json(DataCategory::Risk)
    }

    fn fetch_optimization(&self) -> FetchResult<'_, OptimizationRecord> {
        self.get_json(DataCategory::Optimization)
    }
}

/// Decode a JSON array of `category` records
pub fn decode<T: DeserializeOwned>(category: DataCategory, body: &str) -> Result<Vec<T>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode {
        category,
        message: e.to_string(),
    })
}

// ============================================================================
// MEMORY SOURCE
// ============================================================================

/// Serves a fixed portfolio after an optional delay
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: PortfolioData,
    delay_ms: u32,
}

impl MemorySource {
    pub fn new(data: PortfolioData) -> Self {
        Self { data, delay_ms: 0 }
    }

    /// Built-in sample portfolio
    pub fn sample() -> Self {
        Self::new(PortfolioData::sample())
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    fn serve<T: Clone + 'static>(&self, records: &[T]) -> FetchResult<'_, T> {
        let records = records.to_vec();
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            sleep_ms(delay_ms).await;
            Ok(records)
        })
    }
}

impl DataSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch_performance(&self) -> FetchResult<'_, PerformancePoint> {
        self.serve(&self.data.prices)
    }

    fn fetch_allocation(&self) -> FetchResult<'_, WeightRecord> {
        self.serve(&self.data.weights)
    }

    fn fetch_risk(&self) -> FetchResult<'_, RiskRecord> {
        self.serve(&self.data.risk)
    }

    fn fetch_optimization(&self) -> FetchResult<'_, OptimizationRecord> {
        self.serve(&self.data.optimization)
    }
}

// ============================================================================
// COMBINED LOAD
// ============================================================================

/// Run `op` until it succeeds, fails permanently or the policy gives up
pub async fn with_retry<T, F, Fut, P>(
    category: DataCategory,
    policy: &P,
    mut op: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
    P: RetryPolicy + ?Sized,
{
    let mut attempt = 0u32;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && policy.should_retry(attempt) => {
                let delay = policy.delay_ms(attempt);
                tracing::warn!(%category, attempt = attempt + 1, "{}; retrying in {}ms", e, delay);
                sleep_ms(delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(%category, "{}", e);
                return Err(e);
            }
        }
    }
}

/// Fetch all four categories concurrently into one validated portfolio.
/// The first failure aborts the load; partial data is never returned.
pub async fn load_portfolio<S, P>(source: &S, policy: &P) -> Result<PortfolioData, FetchError>
where
    S: DataSource + ?Sized,
    P: RetryPolicy + ?Sized,
{
    tracing::info!(source = source.name(), "loading portfolio");

    let (prices, weights, risk, optimization) = futures::try_join!(
        with_retry(DataCategory::Performance, policy, || source.fetch_performance()),
        with_retry(DataCategory::Allocation, policy, || source.fetch_allocation()),
        with_retry(DataCategory::Risk, policy, || source.fetch_risk()),
        with_retry(DataCategory::Optimization, policy, || source.fetch_optimization()),
    )?;

    let data = PortfolioData {
        prices,
        weights,
        risk,
        optimization,
    };
    data.validate()?;

    tracing::info!(
        prices = data.prices.len(),
        assets = data.weights.len(),
        "portfolio loaded"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExponentialBackoff;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Allocation endpoint fails `failures` times before answering
    struct FlakySource {
        inner: MemorySource,
        failures: Cell<u32>,
        status: u16,
        calls: Cell<u32>,
    }

    impl FlakySource {
        fn new(failures: u32, status: u16) -> Self {
            Self {
                inner: MemorySource::sample(),
                failures: Cell::new(failures),
                status,
                calls: Cell::new(0),
            }
        }
    }

    impl DataSource for FlakySource {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn fetch_performance(&self) -> FetchResult<'_, PerformancePoint> {
            self.inner.fetch_performance()
        }

        fn fetch_allocation(&self) -> FetchResult<'_, WeightRecord> {
            self.calls.set(self.calls.get() + 1);
            if self.failures.get() > 0 {
                self.failures.set(self.failures.get() - 1);
                let status = self.status;
                return Box::pin(async move {
                    Err(FetchError::Status {
                        category: DataCategory::Allocation,
                        status,
                    })
                });
            }
            self.inner.fetch_allocation()
        }

        fn fetch_risk(&self) -> FetchResult<'_, RiskRecord> {
            self.inner.fetch_risk()
        }

        fn fetch_optimization(&self) -> FetchResult<'_, OptimizationRecord> {
            self.inner.fetch_optimization()
        }
    }

    fn instant_policy(max_attempts: u32) -> ExponentialBackoff {
        ExponentialBackoff::new()
            .initial_delay(0)
            .with_jitter(false)
            .max_attempts(max_attempts)
    }

    #[test]
    fn test_memory_source_loads_sample() {
        let data = block_on(load_portfolio(&MemorySource::sample(), &instant_policy(0))).unwrap();
        assert_eq!(data, PortfolioData::sample());
    }

    #[test]
    fn test_transient_failure_is_retried() {
        let source = FlakySource::new(2, 503);
        let data = block_on(load_portfolio(&source, &instant_policy(3))).unwrap();

        assert_eq!(data.weights.len(), 5);
        assert_eq!(source.calls.get(), 3);
    }

    #[test]
    fn test_retries_exhausted() {
        let source = FlakySource::new(5, 500);
        let err = block_on(load_portfolio(&source, &instant_policy(2))).unwrap_err();

        assert_eq!(
            err,
            FetchError::Status {
                category: DataCategory::Allocation,
                status: 500
            }
        );
        assert_eq!(source.calls.get(), 3);
    }

    #[test]
    fn test_client_error_not_retried() {
        let source = FlakySource::new(1, 404);
        let result = block_on(load_portfolio(&source, &instant_policy(3)));

        assert!(result.is_err());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_non_finite_data_rejected() {
        let mut data = PortfolioData::sample();
        data.risk.push(RiskRecord::new("BAD", f64::NAN));

        let err = block_on(load_portfolio(&MemorySource::new(data), &instant_policy(0))).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_decode_payloads() {
        let prices: Vec<PerformancePoint> = decode(
            DataCategory::Performance,
            r#"[{"date":"Jan","price":10000},{"date":"Feb","totalReturn":2.5,"volatility":11.0,"sharpe":1.2}]"#,
        )
        .unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[1].date(), "Feb");

        let risk: Vec<RiskRecord> = decode(
            DataCategory::Risk,
            r#"[{"symbol":"AAPL","riskContribution":15.0}]"#,
        )
        .unwrap();
        assert_eq!(risk[0].volatility, 15.0);
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        let result: Result<Vec<WeightRecord>, _> = decode(
            DataCategory::Allocation,
            r#"[{"symbol":"AAPL","weight":"lots"}]"#,
        );
        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }

    #[test]
    fn test_http_urls() {
        let source = HttpSource::new("http://localhost:3001/");
        assert_eq!(
            source.url_for(DataCategory::Performance),
            "http://localhost:3001/prices"
        );
        assert_eq!(
            source.url_for(DataCategory::Optimization),
            "http://localhost:3001/optimization"
        );
    }
}
