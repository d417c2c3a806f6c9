//! Navigation state machines: welcome/dashboard screen, active tab, and the
//! data load they gate.
//!
//! Every load is identified by a [`LoadTicket`] carrying a generation number.
//! Only the ticket of the current generation may complete or fail a load;
//! results arriving after a newer load or a teardown are discarded.

use folio_core::DataCategory;

/// Top-level screen. One-way: `Welcome` -> `Dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Dashboard,
}

/// Dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Performance,
    Allocation,
    Risk,
    Optimization,
}

impl Tab {
    pub fn all() -> &'static [Self] {
        &[
            Self::Performance,
            Self::Allocation,
            Self::Risk,
            Self::Optimization,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Allocation => "allocation",
            Self::Risk => "risk",
            Self::Optimization => "optimization",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Performance => "Performance",
            Self::Allocation => "Allocation",
            Self::Risk => "Risk",
            Self::Optimization => "Optimize",
        }
    }

    /// Data category the tab charts
    pub fn category(&self) -> DataCategory {
        match self {
            Self::Performance => DataCategory::Performance,
            Self::Allocation => DataCategory::Allocation,
            Self::Risk => DataCategory::Risk,
            Self::Optimization => DataCategory::Optimization,
        }
    }
}

/// Identifies one data load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Progress of the dashboard data load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Loading => "Loading...",
            Self::Ready => "Ready",
            Self::Failed(_) => "Failed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "load-idle",
            Self::Loading => "load-loading",
            Self::Ready => "load-ready",
            Self::Failed(_) => "load-failed",
        }
    }
}

/// What the main content area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Welcome,
    Loading,
    Failed(String),
    Chart(Tab),
}

/// Screen, active tab and load progress
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    screen: Screen,
    active_tab: Tab,
    load: LoadStatus,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadStatus::Loading)
    }

    /// Leave the welcome screen and start the first load. Returns `None`
    /// when already on the dashboard.
    pub fn enter_dashboard(&mut self) -> Option<LoadTicket> {
        if self.screen == Screen::Dashboard {
            return None;
        }

        self.screen = Screen::Dashboard;
        tracing::debug!("entered dashboard");
        self.begin_load()
    }

    /// Pure assignment; allowed while loading
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(from = self.active_tab.id(), to = tab.id(), "tab selected");
        }
        self.active_tab = tab;
    }

    /// Start a new load, superseding any outstanding one. Loads only run on
    /// the dashboard.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.screen != Screen::Dashboard {
            return None;
        }

        self.generation += 1;
        self.load = LoadStatus::Loading;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// True when `ticket` belongs to the load currently in progress
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.generation && self.is_loading()
    }

    /// Ticket of the load in progress, if any
    pub fn active_ticket(&self) -> Option<LoadTicket> {
        self.is_loading().then_some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Mark the load finished. Returns false for a stale ticket.
    pub fn complete_load(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            tracing::warn!(generation = ticket.generation, "discarding stale load result");
            return false;
        }

        self.load = LoadStatus::Ready;
        true
    }

    /// Mark the load failed. Returns false for a stale ticket.
    pub fn fail_load(&mut self, ticket: LoadTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            tracing::warn!(generation = ticket.generation, "discarding stale load failure");
            return false;
        }

        self.load = LoadStatus::Failed(message.into());
        true
    }

    /// Invalidate every outstanding ticket (view torn down)
    pub fn teardown(&mut self) {
        self.generation += 1;
        if self.is_loading() {
            self.load = LoadStatus::Idle;
        }
    }

    pub fn panel(&self) -> Panel {
        match (self.screen, &self.load) {
            (Screen::Welcome, _) => Panel::Welcome,
            (Screen::Dashboard, LoadStatus::Ready) => Panel::Chart(self.active_tab),
            (Screen::Dashboard, LoadStatus::Failed(msg)) => Panel::Failed(msg.clone()),
            (Screen::Dashboard, LoadStatus::Idle | LoadStatus::Loading) => Panel::Loading,
        }
    }
}
