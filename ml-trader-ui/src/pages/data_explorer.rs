//! Data Explorer Page
//!
//! Pick a symbol, fetch its recent bars and chart them.

use leptos::*;

use crate::api::market::{latest_market_data_options, normalize_symbol, LATEST_MARKET_DATA_ENDPOINT};
use crate::api::{market_data_options, to_ohlc_series, MarketData, MARKET_DATA_ENDPOINT};
use crate::components::{Card, Loading, PriceChart};
use crate::hooks::{use_api, UseApi};

const DEFAULT_SYMBOL: &str = "AAPL";

/// Data explorer page component
#[component]
pub fn DataExplorer() -> impl IntoView {
    let symbol = create_rw_signal(DEFAULT_SYMBOL.to_string());
    let bars = use_api::<Vec<MarketData>>();
    let latest = use_api::<MarketData>();

    let loading = bars.loading();
    let error = bars.error();
    let series = {
        let data = bars.data();
        Signal::derive(move || data.with(|d| d.as_deref().map(to_ohlc_series).unwrap_or_default()))
    };
    let latest_bar = latest.data();

    let fetch = move |_| {
        let ticker = normalize_symbol(&symbol.get_untracked());
        if ticker.is_empty() {
            return;
        }

        spawn_local(load_symbol(bars.clone(), latest.clone(), ticker));
    };

    view! {
        <div class="container mx-auto">
            <h2 class="text-2xl font-semibold text-gray-700 mb-6">"Data Explorer"</h2>
            <div class="bg-white rounded-lg shadow-md p-6">
                <div class="mb-4">
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Symbol"</label>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class="block w-full rounded-md border-gray-300 shadow-sm focus:border-indigo-500 focus:ring-indigo-500 sm:text-sm p-2 border"
                            placeholder=DEFAULT_SYMBOL
                            prop:value=move || symbol.get()
                            on:input=move |ev| symbol.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            on:click=fetch
                            disabled=move || loading.get()
                            class="inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-indigo-600 hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50"
                        >
                            "Fetch Data"
                        </button>
                    </div>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 p-4 rounded-md mb-4 text-sm">
                        {e.to_string()}
                    </div>
                })}

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else if series.with(|s| s.is_empty()) {
                        view! {
                            <div class="bg-gray-100 p-4 rounded-md mb-4">
                                <p class="text-gray-500 text-sm italic">
                                    "No data loaded. Please select a symbol and fetch data."
                                </p>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                <ErrorBoundary fallback=|errors| view! {
                    <div class="bg-red-50 border border-red-200 text-red-700 p-4 rounded-md text-sm">
                        <p class="font-medium">"Chart could not be drawn"</p>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                }>
                    <Card
                        title="Price Chart"
                        footer=view! { <LatestClose bar=latest_bar /> }.into_view()
                    >
                        <PriceChart data=series />
                    </Card>
                </ErrorBoundary>
            </div>
        </div>
    }
}

/// Fetch the bars for `ticker`, then its latest bar.
///
/// The latest bar is cleared first so a failed fetch never leaves the
/// previous symbol's close under the chart. Failures land in hook state.
async fn load_symbol(bars: UseApi<Vec<MarketData>>, latest: UseApi<MarketData>, ticker: String) {
    latest.reset();

    if let Ok(loaded) = bars
        .request(MARKET_DATA_ENDPOINT, market_data_options(&ticker, None, None))
        .await
    {
        log::info!("loaded {} bars for {}", loaded.len(), ticker);
        let _ = latest
            .request(LATEST_MARKET_DATA_ENDPOINT, latest_market_data_options(&ticker))
            .await;
    }
}

/// Footer line with the most recent bar, once known
#[component]
fn LatestClose(bar: Signal<Option<MarketData>>) -> impl IntoView {
    view! {
        <p class="text-sm text-gray-500">
            {move || match bar.get() {
                Some(bar) => format!(
                    "Latest close {:.2} on {}",
                    bar.close,
                    bar.timestamp.format("%Y-%m-%d")
                ),
                None => "No recent bar".to_string(),
            }}
        </p>
    }
}
