//! Portfolio loader: runs one load per ticket on the browser event loop

use crate::{load_portfolio, DataSource, FetchConfig, FetchError, HttpSource, MemorySource};
use folio_core::PortfolioData;
use folio_state::{AppState, LoadTicket};
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen_futures::spawn_local;

// ============================================================================
// PORTFOLIO LOADER
// ============================================================================

/// Loads portfolio data into [`AppState`]
#[derive(Clone)]
pub struct Loader {
    config: FetchConfig,
    source: Rc<dyn DataSource>,
    state: AppState,
}

impl Loader {
    /// Loader for `config`; the source follows the base URL
    pub fn with_config(state: AppState, config: FetchConfig) -> Self {
        let source = source_for(&config);
        Self {
            config,
            source,
            state,
        }
    }

    /// Start the load identified by `ticket` (spawns async task)
    pub fn start(&self, ticket: LoadTicket) -> LoadHandle {
        let handle = LoadHandle::new();
        let handle_clone = handle.clone();
        let loader = self.clone();

        spawn_local(async move {
            let outcome = loader.run(&handle_clone).await;
            loader.finish(ticket, &handle_clone, outcome);
        });

        handle
    }

    /// Load with the configured timeout
    async fn run(&self, handle: &LoadHandle) -> Result<PortfolioData, FetchError> {
        if handle.is_stopped() {
            return Err(FetchError::Cancelled);
        }

        let load = load_portfolio(self.source.as_ref(), &self.config.retry_policy);
        if self.config.timeout_ms == 0 {
            return load.await;
        }

        let timeout = TimeoutFuture::new(self.config.timeout_ms);
        match select(Box::pin(load), Box::pin(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(FetchError::Timeout(self.config.timeout_ms)),
        }
    }

    /// Hand the outcome to the state unless the load was stopped meanwhile
    fn finish(&self, ticket: LoadTicket, handle: &LoadHandle, outcome: Result<PortfolioData, FetchError>) {
        if handle.is_stopped() {
            tracing::info!(generation = ticket.generation(), "load stopped by handle");
            return;
        }

        match outcome {
            Ok(data) => {
                self.state.apply_load(ticket, data);
            }
            Err(e) => {
                tracing::error!(generation = ticket.generation(), "portfolio load failed: {}", e);
                self.state.fail_load(ticket, e.to_string());
            }
        }
    }
}

/// Sample data for [`crate::DEMO_API_URL`], HTTP otherwise
pub fn source_for(config: &FetchConfig) -> Rc<dyn DataSource> {
    if config.is_demo() {
        Rc::new(MemorySource::sample().with_delay(config.demo_delay_ms))
    } else {
        Rc::new(HttpSource::new(config.base_url.clone()))
    }
}

// ============================================================================
// LOAD HANDLE (Send + Sync)
// ============================================================================

/// Handle for cancelling an outstanding load
#[derive(Clone)]
pub struct LoadHandle {
    stopped: Arc<AtomicBool>,
}

impl LoadHandle {
    fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Discard the result of the load
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

// ============================================================================
// LEPTOS INTEGRATION
// ============================================================================

/// Hook owning the loads of the calling component. Every new ticket issued
/// by the view state starts a load, stopping the previous one; on cleanup the
/// last load is stopped and all outstanding tickets are invalidated.
pub fn use_portfolio_loader(state: AppState, config: FetchConfig) {
    let loader = Loader::with_config(state, config);
    let current = StoredValue::new(None::<LoadHandle>);

    Effect::new(move |started: Option<Option<LoadTicket>>| {
        let ticket = state.active_ticket();
        if let Some(ticket) = ticket {
            if started.flatten() != Some(ticket) {
                let handle = loader.start(ticket);
                if let Some(Some(previous)) = current.try_get_value() {
                    previous.stop();
                }
                current.set_value(Some(handle));
            }
        }
        ticket
    });

    on_cleanup(move || {
        current.try_with_value(|handle| {
            if let Some(handle) = handle {
                handle.stop();
            }
        });
        state.teardown();
    });
}

// ============================================================================
// TESTS
// ============================================================================
