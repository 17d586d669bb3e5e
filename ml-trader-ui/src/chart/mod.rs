//! Candlestick charting
//!
//! [`ChartRenderer`] owns the lifecycle; the drawing itself goes through the
//! [`ChartHost`]/[`DrawingSurface`] seam, backed by a canvas in the browser.

pub mod canvas;
#[cfg(test)]
pub(crate) mod fakes;
pub mod options;
pub mod renderer;
pub mod resize;
pub mod scale;
pub mod series;
pub mod surface;

pub use canvas::{CanvasHost, CanvasSurface};
pub use options::{CandlestickStyle, ChartOptions, DEFAULT_CHART_HEIGHT};
pub use renderer::ChartRenderer;
pub use resize::{ResizeSource, WindowResize};
pub use series::{inspect_series, OhlcRecord, SeriesIssue};
pub use surface::{ChartError, ChartHost, DrawingSurface, SeriesId};
