//! Welcome screen

use folio_state::use_app_state;
use leptos::prelude::*;

#[component]
pub fn Welcome() -> impl IntoView {
    let state = use_app_state();

    let enter = move |_| {
        if let Some(ticket) = state.enter_dashboard() {
            tracing::info!(generation = ticket.generation(), "entering dashboard");
        }
    };

    view! {
        <section class="welcome">
            <h1 class="welcome-title">"Portfolio Analytics"</h1>
            <p class="welcome-subtitle">
                "Performance, allocation, risk and optimization at a glance"
            </p>
            <button class="welcome-enter" on:click=enter>
                "Enter Dashboard"
            </button>
        </section>
    }
}
