//! Price Chart Component
//!
//! Candlestick chart bound to a container div. The chart is rebuilt whenever
//! the data or the height changes and released when the component unmounts.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::chart::{
    CanvasHost, ChartError, ChartHost, ChartRenderer, OhlcRecord, ResizeSource, WindowResize,
    DEFAULT_CHART_HEIGHT,
};

/// Candlestick chart for an ordered OHLC series
#[component]
pub fn PriceChart(
    /// Bars in chronological order
    #[prop(into)]
    data: Signal<Vec<OhlcRecord>>,
    /// Chart height in pixels
    #[prop(into, default = DEFAULT_CHART_HEIGHT.into())]
    height: MaybeSignal<u32>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let chart_error = create_rw_signal(None::<ChartError>);

    let renderer: Rc<RefCell<ChartRenderer<CanvasHost, WindowResize>>> =
        Rc::new(RefCell::new(ChartRenderer::new(WindowResize::new())));

    let host = move || {
        container.get().map(|div| {
            let element: &web_sys::HtmlElement = &div;
            CanvasHost::new(element.clone())
        })
    };
    track_chart(renderer.clone(), host, data, height, chart_error);

    on_cleanup(move || renderer.borrow_mut().teardown());

    view! {
        <div node_ref=container class="w-full" />
        // Left for the page's ErrorBoundary
        {move || chart_error.get().map(Err::<(), ChartError>)}
    }
}

/// Re-render on every change of `data`, `height` or whatever `host` reads.
/// The outcome of the latest render is written to `error`.
pub fn track_chart<H: ChartHost, R: ResizeSource>(
    renderer: Rc<RefCell<ChartRenderer<H, R>>>,
    host: impl Fn() -> Option<H> + 'static,
    data: Signal<Vec<OhlcRecord>>,
    height: MaybeSignal<u32>,
    error: RwSignal<Option<ChartError>>,
) {
    create_effect(move |_| {
        let data = data.get();
        let height = height.get();
        let host = host();

        let result = renderer.borrow_mut().render(host.as_ref(), &data, height);
        if let Err(e) = &result {
            log::error!("chart render failed: {}", e);
        }
        error.set(result.err());
    });
}
