//! Dashboard Page
//!
//! Landing view: headline figures for models, data and strategies.

use leptos::*;

use crate::components::{Accent, MetricCard};

const MODELS_ICON: &str = "M13 6a3 3 0 11-6 0 3 3 0 016 0zM18 8a2 2 0 11-4 0 2 2 0 014 0zM14 15a4 4 0 00-8 0v3h8v-3zM6 8a2 2 0 11-4 0 2 2 0 014 0zM16 18v-3a5.972 5.972 0 00-.75-2.906A3.005 3.005 0 0119 15v3h-3zM4.75 12.094A5.973 5.973 0 004 15v3H1v-3a3 3 0 013.75-2.906z";
const DATASET_ICON: &str = "M4 4a2 2 0 00-2 2v4a2 2 0 002 2V6h10a2 2 0 00-2-2H4zm2 6a2 2 0 012-2h8a2 2 0 012 2v4a2 2 0 01-2 2H8a2 2 0 01-2-2v-4zm6 4a2 2 0 100-4 2 2 0 000 4z";
const BACKTESTS_ICON: &str = "M3 1a1 1 0 000 2h1.22l.305 1.222a.997.997 0 00.01.042l1.358 5.43-.893.892C3.74 11.846 4.632 14 6.414 14H15a1 1 0 000-2H6.414l1-1H14a1 1 0 00.894-.553l3-6A1 1 0 0017 3H6.28l-.31-1.243A1 1 0 005 1H3zM16 16.5a1.5 1.5 0 11-3 0 1.5 1.5 0 013 0zM6.5 18a1.5 1.5 0 100-3 1.5 1.5 0 000 3z";
const STRATEGIES_ICON: &str = "M18 5v8a2 2 0 01-2 2h-5l-5 4v-4H4a2 2 0 01-2-2V5a2 2 0 012-2h12a2 2 0 012 2zM7 8H5v2h2V8zm2 0h2v2H9V8zm6 0h-2v2h2V8z";

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="grid gap-6 mb-8 md:grid-cols-2 xl:grid-cols-4">
            <MetricCard label="Models" value="8" accent=Accent::Orange icon=MODELS_ICON />
            <MetricCard label="Dataset Size" value="1,235 records" accent=Accent::Green icon=DATASET_ICON />
            <MetricCard label="Backtests" value="12" accent=Accent::Blue icon=BACKTESTS_ICON />
            <MetricCard label="Active Strategies" value="3" accent=Accent::Teal icon=STRATEGIES_ICON />
        </div>
    }
}
