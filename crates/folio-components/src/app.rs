//! Application root: switches between the welcome screen and the dashboard

use crate::{Dashboard, Welcome};
use folio_fetch::FetchConfig;
use folio_state::{provide_app_state, Screen};
use leptos::prelude::*;

#[component]
pub fn App(#[prop(optional)] config: Option<FetchConfig>) -> impl IntoView {
    let state = provide_app_state();
    let config = config.unwrap_or_default();
    tracing::info!(api = %config.base_url, "portfolio dashboard starting");

    // Tab and load transitions must not remount the dashboard
    let screen = Memo::new(move |_| state.screen());

    view! {
        <div class="app">
            {move || match screen.get() {
                Screen::Welcome => view! { <Welcome /> }.into_any(),
                Screen::Dashboard => view! { <Dashboard config=config.clone() /> }.into_any(),
            }}
        </div>
    }
}
