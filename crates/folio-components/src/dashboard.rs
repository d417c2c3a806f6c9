//! Main dashboard layout component

use folio_charts::{palette, BarChart, LineChart};
use folio_fetch::{use_portfolio_loader, FetchConfig};
use folio_state::{use_app_state, Panel, PortfolioState, Tab};
use leptos::prelude::*;

use crate::{OptimizationDeltas, SummaryCards};

#[component]
pub fn Dashboard(#[prop(optional)] config: Option<FetchConfig>) -> impl IntoView {
    let state = use_app_state();
    use_portfolio_loader(state, config.unwrap_or_default());

    let refresh = move |_| {
        if let Some(ticket) = state.begin_reload() {
            tracing::info!(generation = ticket.generation(), "reload requested");
        }
    };

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <h1 class="dash-title">"Portfolio Dashboard"</h1>
                <button
                    class="dash-refresh"
                    on:click=refresh
                    disabled=move || state.is_loading()
                >
                    "Refresh"
                </button>
            </header>

            <SummaryCards portfolio=state.portfolio />

            <main class="dash-main">
                <TabBar />
                <div class="panel chart-container">
                    <div class="panel-header">
                        <span class="panel-title">{move || state.active_tab().label()}</span>
                    </div>
                    <div class="panel-content">
                        <ChartPanel />
                    </div>
                </div>
            </main>

            <footer class="dash-footer">
                <StatusBar />
            </footer>
        </div>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let state = use_app_state();

    view! {
        <nav class="tab-bar">
            {Tab::all()
                .iter()
                .map(|&tab| {
                    view! {
                        <button
                            class=move || {
                                if state.active_tab() == tab { "tab active" } else { "tab" }
                            }
                            on:click=move |_| state.select_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Loading spinner, load error, or the chart of the active tab
#[component]
pub fn ChartPanel() -> impl IntoView {
    let state = use_app_state();
    let panel = Memo::new(move |_| state.panel());

    move || match panel.get() {
        Panel::Welcome => view! { <div class="chart-empty"></div> }.into_any(),
        Panel::Loading => view! { <LoadingIndicator /> }.into_any(),
        Panel::Failed(message) => view! {
            <div class="chart-failed">
                <span class="error-icon">"⚠"</span>
                <span class="error-msg">{message}</span>
            </div>
        }
        .into_any(),
        Panel::Chart(tab) => view! { <TabChart tab=tab portfolio=state.portfolio /> }.into_any(),
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <span class="loading-text">"Loading data..."</span>
        </div>
    }
}

#[component]
fn TabChart(tab: Tab, portfolio: PortfolioState) -> impl IntoView {
    let series = Signal::derive(move || portfolio.series_for(tab));

    match tab {
        Tab::Performance => view! { <LineChart series=series /> }.into_any(),
        Tab::Allocation => view! { <BarChart series=series palette=palette::ALLOCATION /> }.into_any(),
        Tab::Risk => view! { <BarChart series=series palette=palette::RISK /> }.into_any(),
        Tab::Optimization => view! {
            <BarChart series=series palette=palette::OPTIMIZATION />
            <OptimizationDeltas portfolio=portfolio />
        }
        .into_any(),
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let error = state.error;
    let loaded_at = state.portfolio.loaded_at;

    view! {
        <div class="status-bar">
            <div class="sb-load">
                <span class="sb-label">"Data:"</span>
                <span class=move || format!("sb-value {}", state.load_status().css_class())>
                    {move || state.load_status().label()}
                </span>
            </div>

            {move || {
                loaded_at.get().map(|t| {
                    view! {
                        <div class="sb-updated">
                            <span class="sb-label">"Updated:"</span>
                            <span class="sb-value">{t.format("%H:%M:%S UTC").to_string()}</span>
                        </div>
                    }
                })
            }}

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="sb-error">
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}

            <div class="sb-version">
                <span>{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
            </div>
        </div>
    }
}
