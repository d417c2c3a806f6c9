//! Summary cards and optimization weight changes

use folio_core::{
    CurrencyFormatter, HeadlineKind, PercentFormatter, PortfolioData, PortfolioSummary,
    ValueFormatter,
};
use folio_state::PortfolioState;
use leptos::prelude::*;

/// One summary card
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    /// Secondary line, e.g. the period change
    pub detail: Option<String>,
    pub css_class: &'static str,
}

/// Cards for total value (or total return), asset count and average
/// volatility
pub fn summary_cards(summary: &PortfolioSummary) -> Vec<SummaryCard> {
    let trend = if summary.is_up() { "card up" } else { "card down" };
    let (label, value) = match summary.headline {
        HeadlineKind::Value => (
            "Total Value",
            CurrencyFormatter::default().format(summary.total_value),
        ),
        HeadlineKind::Return => (
            "Total Return",
            PercentFormatter { decimals: 1 }.format(summary.total_value),
        ),
    };

    vec![
        SummaryCard {
            label,
            value,
            detail: summary.change_percent_str(),
            css_class: trend,
        },
        SummaryCard {
            label: "Assets",
            value: summary.asset_count.to_string(),
            detail: None,
            css_class: "card",
        },
        SummaryCard {
            label: "Avg. Volatility",
            value: PercentFormatter { decimals: 1 }.format(summary.avg_volatility),
            detail: None,
            css_class: "card",
        },
    ]
}

/// Suggested change of one asset's weight
#[derive(Debug, Clone, PartialEq)]
pub struct WeightChange {
    pub symbol: String,
    pub target: f64,
    /// Percentage points versus the current weight
    pub delta: f64,
}

impl WeightChange {
    pub fn delta_str(&self) -> String {
        format!("{:+.1} pp", self.delta)
    }

    pub fn css_class(&self) -> &'static str {
        if self.delta >= 0.0 {
            "delta up"
        } else {
            "delta down"
        }
    }
}

/// Optimization records that carry a current weight
pub fn weight_changes(data: &PortfolioData) -> Vec<WeightChange> {
    data.optimization
        .iter()
        .filter_map(|record| {
            record.weight_delta().map(|delta| WeightChange {
                symbol: record.symbol.clone(),
                target: record.weight,
                delta,
            })
        })
        .collect()
}

#[component]
pub fn SummaryCards(portfolio: PortfolioState) -> impl IntoView {
    let summary = Memo::new(move |_| portfolio.summary());

    view! {
        <div class="summary-cards">
            {move || {
                summary_cards(&summary.get())
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class=card.css_class>
                                <span class="card-label">{card.label}</span>
                                <span class="card-value">{card.value}</span>
                                {card.detail.map(|d| view! { <span class="card-detail">{d}</span> })}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn OptimizationDeltas(portfolio: PortfolioState) -> impl IntoView {
    let changes = move || portfolio.data.with(weight_changes);

    view! {
        <table class="opt-deltas">
            <thead>
                <tr>
                    <th>"Asset"</th>
                    <th>"Target"</th>
                    <th>"Change"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    changes()
                        .into_iter()
                        .map(|change| {
                            let class = change.css_class();
                            let delta = change.delta_str();
                            view! {
                                <tr>
                                    <td>{change.symbol}</td>
                                    <td>{PercentFormatter { decimals: 1 }.format(change.target)}</td>
                                    <td class=class>{delta}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
