//! # folio-fetch
//!
//! Asynchronous portfolio data loading with retry and cancellation.
//! Uses Strategy pattern for retry backoff policies and data sources.

pub mod client;
pub mod source;

pub use client::*;
pub use source::*;

use folio_core::{DataCategory, SeriesError};
use thiserror::Error;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";

/// Base URL selecting the in-memory sample source
pub const DEMO_API_URL: &str = "demo:";

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to load one category or the whole portfolio
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request for {category} data failed: {message}")]
    Http {
        category: DataCategory,
        message: String,
    },
    #[error("{category} endpoint returned HTTP {status}")]
    Status { category: DataCategory, status: u16 },
    #[error("could not decode {category} data: {message}")]
    Decode {
        category: DataCategory,
        message: String,
    },
    #[error("malformed portfolio data: {0}")]
    Malformed(#[from] SeriesError),
    #[error("loading timed out after {0} ms")]
    Timeout(u32),
    #[error("load cancelled")]
    Cancelled,
}

impl FetchError {
    /// Transport failures and server errors are worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

// ============================================================================
// STRATEGY PATTERN: Retry Policy
// ============================================================================

/// Strategy trait for retry backoff
pub trait RetryPolicy {
    /// Calculate delay in milliseconds before retry `attempt` (0-indexed)
    fn delay_ms(&self, attempt: u32) -> u32;

    /// Check if another attempt should be made
    fn should_retry(&self, attempt: u32) -> bool;
}

/// Exponential backoff retry policy
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    /// Delay before the first retry (ms)
    pub initial_delay_ms: u32,
    /// Maximum delay between attempts (ms)
    pub max_delay_ms: u32,
    /// Multiplier for each subsequent attempt
    pub multiplier: f64,
    /// Maximum number of retries (0 = no retries)
    pub max_attempts: u32,
    /// Add pseudo-random jitter to delay
    pub jitter: bool,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            max_delay_ms: 4000,
            multiplier: 2.0,
            max_attempts: 3,
            jitter: true,
        }
    }
}

impl ExponentialBackoff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_delay(mut self, ms: u32) -> Self {
        self.initial_delay_ms = ms;
        self
    }

    pub fn max_delay(mut self, ms: u32) -> Self {
        self.max_delay_ms = ms;
        self
    }

    pub fn multiplier(mut self, m: f64) -> Self {
        self.multiplier = m;
        self
    }

    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Fail on the first error
    pub fn none() -> Self {
        Self::default().max_attempts(0)
    }
}

impl RetryPolicy for ExponentialBackoff {
    fn delay_ms(&self, attempt: u32) -> u32 {
        let base_delay = self.initial_delay_ms as f64 * self.multiplier.powi(attempt as i32);
        let mut delay = (base_delay as u32).min(self.max_delay_ms);

        // +/-20% jitter, derived from the attempt number
        if self.jitter && delay > 0 {
            let jitter_range = delay / 5;
            let jitter = ((attempt * 7919) % (jitter_range * 2 + 1)) as i32 - jitter_range as i32;
            delay = (delay as i32 + jitter).max(50) as u32;
        }

        delay
    }

    fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

// ============================================================================
// FETCH CONFIGURATION
// ============================================================================

/// Data loader configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// API base URL, or [`DEMO_API_URL`] for the built-in sample data
    pub base_url: String,
    pub retry_policy: ExponentialBackoff,
    /// Whole-load timeout in milliseconds (0 = disabled)
    pub timeout_ms: u32,
    /// Artificial latency of the demo source in milliseconds
    pub demo_delay_ms: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            retry_policy: ExponentialBackoff::default(),
            timeout_ms: 10000,
            demo_delay_ms: 1000,
        }
    }
}

impl FetchConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Built-in sample data instead of HTTP; it never fails, so no retries
    pub fn demo() -> Self {
        Self::new(DEMO_API_URL).with_policy(ExponentialBackoff::none())
    }

    pub fn is_demo(&self) -> bool {
        self.base_url == DEMO_API_URL
    }

    pub fn with_policy(mut self, policy: ExponentialBackoff) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn demo_delay(mut self, delay_ms: u32) -> Self {
        self.demo_delay_ms = delay_ms;
        self
    }
}

/// Sleep for `ms` on the browser event loop; zero returns immediately
pub(crate) async fn sleep_ms(ms: u32) {
    if ms > 0 {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
