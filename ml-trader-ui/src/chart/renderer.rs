//! Chart Renderer
//!
//! Owns at most one live drawing surface and one resize listener. Every
//! `render` first releases what the previous run acquired, then rebuilds
//! from scratch: clear, build, attach, load, fit, listen.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::options::{CandlestickStyle, ChartOptions};
use super::resize::{ListenerId, ResizeSource};
use super::series::{inspect_series, OhlcRecord};
use super::surface::{ChartError, ChartHost, DrawingSurface, SeriesId};

/// A surface plus the listener keeping it sized; both released on drop
pub struct ActiveChart<S: DrawingSurface + 'static, R: ResizeSource> {
    surface: Rc<RefCell<S>>,
    listener: Option<ListenerId>,
    resize: R,
}

impl<S: DrawingSurface + 'static, R: ResizeSource> ActiveChart<S, R> {
    fn new(surface: S, resize: R) -> Self {
        Self {
            surface: Rc::new(RefCell::new(surface)),
            listener: None,
            resize,
        }
    }

    fn attach_series(&mut self, style: CandlestickStyle) -> SeriesId {
        self.surface.borrow_mut().add_candlestick_series(style)
    }

    fn load(&mut self, series: SeriesId, data: &[OhlcRecord]) -> Result<(), ChartError> {
        self.surface.borrow_mut().set_series_data(series, data)
    }

    fn fit(&mut self) {
        self.surface.borrow_mut().fit_content();
    }

    /// Keep the surface as wide as the host on every resize
    fn listen<H: ChartHost>(&mut self, host: &H) -> Result<(), ChartError> {
        let surface: Weak<RefCell<S>> = Rc::downgrade(&self.surface);
        let host = host.clone();

        let id = self.resize.subscribe(Box::new(move || {
            let Some(surface) = surface.upgrade() else {
                return;
            };
            let width = host.client_width();
            if let Ok(mut surface) = surface.try_borrow_mut() {
                surface.apply_width(width);
            };
        }))?;

        self.listener = Some(id);
        Ok(())
    }
}

impl<S: DrawingSurface + 'static, R: ResizeSource> Drop for ActiveChart<S, R> {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.resize.unsubscribe(id);
        }
        self.surface.borrow_mut().remove();
    }
}

/// Renders an OHLC series as candlesticks into a host container
pub struct ChartRenderer<H: ChartHost, R: ResizeSource> {
    resize: R,
    style: CandlestickStyle,
    active: Option<ActiveChart<H::Surface, R>>,
}

impl<H: ChartHost, R: ResizeSource> ChartRenderer<H, R> {
    pub fn new(resize: R) -> Self {
        Self {
            resize,
            style: CandlestickStyle::default(),
            active: None,
        }
    }

    /// Rebuild the chart for `data`.
    ///
    /// With no host or no data nothing is drawn and the container is left
    /// alone. Errors from the surface are returned as-is; whatever was
    /// acquired before the failure is released.
    pub fn render(&mut self, host: Option<&H>, data: &[OhlcRecord], height: u32) -> Result<(), ChartError> {
        self.teardown();

        let Some(host) = host else {
            return Ok(());
        };
        if data.is_empty() {
            return Ok(());
        }

        let issues = inspect_series(data);
        if !issues.is_empty() {
            log::warn!(
                "rendering {} bars with {} issue(s), first: {:?}",
                data.len(),
                issues.len(),
                issues[0]
            );
        }

        host.clear();

        let surface = host.create_surface(&ChartOptions::light(height))?;
        let mut chart = ActiveChart::new(surface, self.resize.clone());
        let series = chart.attach_series(self.style.clone());
        chart.load(series, data)?;
        chart.fit();
        chart.listen(host)?;

        log::debug!("chart rendered: {} bars, height {}", data.len(), height);
        self.active = Some(chart);
        Ok(())
    }

    /// Release the current surface and listener, if any
    pub fn teardown(&mut self) {
        if self.active.take().is_some() {
            log::debug!("chart torn down");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
