//! Canvas backend
//!
//! Draws candlesticks onto an HTML5 canvas created inside a container div.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::options::{CandlestickStyle, ChartOptions};
use super::scale::{PlotArea, PriceScale, TimeScale, VisibleRange, PRICE_AXIS_WIDTH};
use super::series::OhlcRecord;
use super::surface::{ChartError, ChartHost, DrawingSurface, SeriesId};

/// Width used when the container reports zero (not laid out yet)
const FALLBACK_WIDTH: u32 = 600;
const PRICE_TICKS: usize = 5;
const MIN_LABEL_GAP: f64 = 80.0;

/// A container element charts are drawn into
#[derive(Clone)]
pub struct CanvasHost {
    container: HtmlElement,
}

impl CanvasHost {
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }
}

impl ChartHost for CanvasHost {
    type Surface = CanvasSurface;

    fn clear(&self) {
        self.container.set_inner_html("");
    }

    fn client_width(&self) -> u32 {
        self.container.client_width().max(0) as u32
    }

    fn create_surface(&self, options: &ChartOptions) -> Result<CanvasSurface, ChartError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ChartError::NoWindow)?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| ChartError::Surface(format!("{:?}", e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ChartError::Surface("element is not a canvas".to_string()))?;

        let width = match options.width {
            Some(width) => width,
            None => match self.client_width() {
                0 => FALLBACK_WIDTH,
                width => width,
            },
        };
        canvas.set_width(width);
        canvas.set_height(options.height);
        let _ = canvas.style().set_property("display", "block");

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ChartError::Surface(format!("{:?}", e)))?
            .ok_or_else(|| ChartError::Surface("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::Surface("unexpected context type".to_string()))?;

        self.container
            .append_child(&canvas)
            .map_err(|e| ChartError::Surface(format!("{:?}", e)))?;

        let surface = CanvasSurface {
            canvas,
            ctx,
            options: options.clone(),
            style: None,
            data: Vec::new(),
            range: None,
            removed: false,
        };
        surface.draw();
        Ok(surface)
    }
}

/// One canvas holding a single candlestick series
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    options: ChartOptions,
    style: Option<CandlestickStyle>,
    data: Vec<OhlcRecord>,
    range: Option<VisibleRange>,
    removed: bool,
}

impl DrawingSurface for CanvasSurface {
    fn add_candlestick_series(&mut self, style: CandlestickStyle) -> SeriesId {
        self.style = Some(style);
        SeriesId(0)
    }

    fn set_series_data(&mut self, series: SeriesId, data: &[OhlcRecord]) -> Result<(), ChartError> {
        if series != SeriesId(0) || self.style.is_none() {
            return Err(ChartError::UnknownSeries(series));
        }
        self.data = data.to_vec();
        self.draw();
        Ok(())
    }

    fn fit_content(&mut self) {
        self.range = Some(VisibleRange::fit(self.data.len()));
        self.draw();
    }

    fn apply_width(&mut self, width: u32) {
        if self.removed || width == 0 || width == self.canvas.width() {
            return;
        }
        self.canvas.set_width(width);
        self.draw();
    }

    fn remove(&mut self) {
        if self.removed {
            return;
        }
        self.removed = true;
        self.data.clear();
        self.canvas.remove();
    }
}

impl CanvasSurface {
    fn draw(&self) {
        if self.removed {
            return;
        }

        let ctx = &self.ctx;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let area = PlotArea::for_surface(width, height);
        let layout = &self.options.layout;

        ctx.set_fill_style(&layout.background.as_str().into());
        ctx.fill_rect(0.0, 0.0, width, height);

        let range = self.range.unwrap_or_else(|| VisibleRange::fit(self.data.len()));
        let time_scale = TimeScale::new(range, area);

        ctx.set_line_width(1.0);
        ctx.set_font(&layout.font);
        self.draw_time_axis(&time_scale, &area, height);

        // Grid, price labels, then candles on top
        if let Some(price_scale) = PriceScale::from_records(&self.data) {
            ctx.set_stroke_style(&self.options.grid.horz_lines.as_str().into());
            ctx.set_fill_style(&layout.text_color.as_str().into());
            for price in price_scale.ticks(PRICE_TICKS) {
                let y = price_scale.price_to_y(price, &area).round() + 0.5;
                ctx.begin_path();
                ctx.move_to(area.left, y);
                ctx.line_to(area.right(), y);
                ctx.stroke();

                let _ = ctx.fill_text(&format!("{:.2}", price), area.right() + 6.0, y + 4.0);
            }

            self.draw_candles(&price_scale, &time_scale, &area);
        }

        // Axis borders
        ctx.set_stroke_style(&self.options.time_scale.border_color.as_str().into());
        ctx.begin_path();
        ctx.move_to(area.left, area.bottom() + 0.5);
        ctx.line_to(area.right(), area.bottom() + 0.5);
        ctx.move_to(area.right() + 0.5, area.top);
        ctx.line_to(area.right() + 0.5, area.bottom());
        ctx.stroke();
    }

    fn draw_candles(&self, price_scale: &PriceScale, time_scale: &TimeScale, area: &PlotArea) {
        let Some(style) = &self.style else {
            return;
        };
        let ctx = &self.ctx;
        let body_width = time_scale.body_width();

        for index in time_scale.visible_indices(self.data.len()) {
            let bar = &self.data[index];
            if !bar.is_finite() {
                continue;
            }

            let up = bar.is_up();
            let x = time_scale.index_to_x(index);

            // Wick
            ctx.set_stroke_style(&style.wick_color(up).into());
            ctx.begin_path();
            ctx.move_to(x.round() + 0.5, price_scale.price_to_y(bar.high, area));
            ctx.line_to(x.round() + 0.5, price_scale.price_to_y(bar.low, area));
            ctx.stroke();

            // Body
            let open_y = price_scale.price_to_y(bar.open, area);
            let close_y = price_scale.price_to_y(bar.close, area);
            let top = open_y.min(close_y);
            let body_height = (open_y - close_y).abs().max(1.0);

            ctx.set_fill_style(&style.body_color(up).into());
            ctx.fill_rect(x - body_width / 2.0, top, body_width, body_height);

            if style.border_visible {
                ctx.set_stroke_style(&style.wick_color(up).into());
                ctx.stroke_rect(x - body_width / 2.0, top, body_width, body_height);
            }
        }
    }

    fn draw_time_axis(&self, time_scale: &TimeScale, area: &PlotArea, height: f64) {
        let ctx = &self.ctx;
        let step = time_scale.label_step(MIN_LABEL_GAP);

        ctx.set_fill_style(&self.options.layout.text_color.as_str().into());
        ctx.set_stroke_style(&self.options.grid.vert_lines.as_str().into());

        for index in time_scale.visible_indices(self.data.len()).step_by(step) {
            let x = time_scale.index_to_x(index);

            ctx.begin_path();
            ctx.move_to(x.round() + 0.5, area.top);
            ctx.line_to(x.round() + 0.5, area.bottom());
            ctx.stroke();

            let label = &self.data[index].time;
            let label_width = ctx.measure_text(label).map(|m| m.width()).unwrap_or(0.0);
            let label_x = (x - label_width / 2.0)
                .max(area.left)
                .min(area.right() + PRICE_AXIS_WIDTH - label_width);
            let _ = ctx.fill_text(label, label_x, height - 9.0);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::chart::{ChartRenderer, WindowResize};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let div = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div.dyn_into::<HtmlElement>().unwrap()
    }

    fn bars() -> Vec<OhlcRecord> {
        vec![
            OhlcRecord::new("2024-01-02", 187.15, 188.44, 183.89, 185.64),
            OhlcRecord::new("2024-01-03", 184.22, 185.88, 183.43, 184.25),
        ]
    }

    #[wasm_bindgen_test]
    fn test_render_mounts_single_canvas() {
        let element = container();
        let host = CanvasHost::new(element.clone());
        let resize = WindowResize::new();
        let mut renderer = ChartRenderer::new(resize.clone());

        renderer.render(Some(&host), &bars(), 240).unwrap();
        renderer.render(Some(&host), &bars(), 240).unwrap();

        assert_eq!(element.child_element_count(), 1);
        assert_eq!(resize.listener_count(), 1);

        let canvas = element
            .first_element_child()
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        assert_eq!(canvas.height(), 240);
    }

    #[wasm_bindgen_test]
    fn test_teardown_detaches_canvas() {
        let element = container();
        let host = CanvasHost::new(element.clone());
        let resize = WindowResize::new();
        let mut renderer = ChartRenderer::new(resize.clone());

        renderer.render(Some(&host), &bars(), 300).unwrap();
        renderer.teardown();

        assert_eq!(element.child_element_count(), 0);
        assert_eq!(resize.listener_count(), 0);
    }
}
