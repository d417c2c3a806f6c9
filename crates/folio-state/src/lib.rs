//! # folio-state
//!
//! Reactive state management for the Portfolio Analytics Dashboard.
//! Plain state machines live in `view`; `AppState` wraps them in Leptos
//! signals so the UI re-renders on every transition.

pub mod portfolio;
pub mod view;

pub use portfolio::*;
pub use view::*;

use folio_core::PortfolioData;
use leptos::prelude::*;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone, Copy)]
pub struct AppState {
    /// Screen, tab and load progress
    pub view: RwSignal<ViewState>,
    /// Data of the last applied load
    pub portfolio: PortfolioState,
    /// Current error message
    pub error: RwSignal<Option<String>>,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(ViewState::new()),
            portfolio: PortfolioState::new(),
            error: RwSignal::new(None),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Leave the welcome screen; returns the ticket of the load to start
    pub fn enter_dashboard(&self) -> Option<LoadTicket> {
        let mut ticket = None;
        self.view.update(|v| ticket = v.enter_dashboard());
        ticket
    }

    /// Select a dashboard tab
    pub fn select_tab(&self, tab: Tab) {
        self.view.update(|v| v.select_tab(tab));
    }

    pub fn screen(&self) -> Screen {
        self.view.with(|v| v.screen())
    }

    pub fn active_tab(&self) -> Tab {
        self.view.with(|v| v.active_tab())
    }

    pub fn panel(&self) -> Panel {
        self.view.with(|v| v.panel())
    }

    pub fn load_status(&self) -> LoadStatus {
        self.view.with(|v| v.load_status().clone())
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Check if loading
    pub fn is_loading(&self) -> bool {
        self.view.with(|v| v.is_loading())
    }

    pub fn active_ticket(&self) -> Option<LoadTicket> {
        self.view.with(|v| v.active_ticket())
    }

    /// Start a reload, superseding any outstanding load
    pub fn begin_reload(&self) -> Option<LoadTicket> {
        let mut ticket = None;
        self.view.update(|v| ticket = v.begin_load());
        if ticket.is_some() {
            self.clear_error();
        }
        ticket
    }

    /// Apply a finished load. Stale results are dropped and false returned.
    pub fn apply_load(&self, ticket: LoadTicket, data: PortfolioData) -> bool {
        if !self.view.with_untracked(|v| v.is_current(ticket)) {
            tracing::warn!(generation = ticket.generation(), "dropping stale portfolio data");
            return false;
        }

        self.portfolio.replace(data);
        let mut applied = false;
        self.view.update(|v| applied = v.complete_load(ticket));
        if applied {
            self.clear_error();
        }
        applied
    }

    /// Record a failed load. Stale failures are dropped and false returned.
    pub fn fail_load(&self, ticket: LoadTicket, message: impl Into<String>) -> bool {
        let message = message.into();
        let mut applied = false;
        self.view.update(|v| applied = v.fail_load(ticket, message.clone()));
        if applied {
            self.set_error(message);
        }
        applied
    }

    /// Invalidate outstanding loads (component torn down)
    pub fn teardown(&self) {
        self.view.update(|v| v.teardown());
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Set error message
    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    /// Clear error
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state);
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
