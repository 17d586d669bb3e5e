//! Drawing surface seams.
//!
//! A [`ChartHost`] is the container a chart lives in; it builds
//! [`DrawingSurface`]s scoped to itself. The browser implementation is in
//! [`super::canvas`].

use thiserror::Error;

use super::options::{CandlestickStyle, ChartOptions};
use super::series::OhlcRecord;

/// Failure while building or feeding a drawing surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No window/document to draw in
    #[error("No browser window available")]
    NoWindow,

    /// Canvas or rendering context could not be created
    #[error("Failed to create drawing surface: {0}")]
    Surface(String),

    /// Series handle does not belong to this surface
    #[error("Unknown series {0:?}")]
    UnknownSeries(SeriesId),

    /// Resize listener could not be registered
    #[error("Failed to register resize listener: {0}")]
    Listener(String),
}

/// Handle to a series attached to a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(pub usize);

/// A chart bound to one container.
///
/// The surface keeps drawing whatever it holds until [`remove`](Self::remove)
/// is called.
pub trait DrawingSurface {
    /// Attach a candlestick series
    fn add_candlestick_series(&mut self, style: CandlestickStyle) -> SeriesId;

    /// Replace the series' data with `data`, in the given order
    fn set_series_data(&mut self, series: SeriesId, data: &[OhlcRecord]) -> Result<(), ChartError>;

    /// Fit the time axis to the full loaded range
    fn fit_content(&mut self);

    /// Resize horizontally, in CSS pixels
    fn apply_width(&mut self, width: u32);

    /// Tear down: drop rendering resources and detach from the container.
    /// Calling it twice is harmless.
    fn remove(&mut self);
}

/// The container a chart renders into
pub trait ChartHost: Clone + 'static {
    type Surface: DrawingSurface + 'static;

    /// Remove everything previously drawn inside the container
    fn clear(&self);

    /// Current container width in CSS pixels
    fn client_width(&self) -> u32;

    /// Build a fresh surface inside the container
    fn create_surface(&self, options: &ChartOptions) -> Result<Self::Surface, ChartError>;
}
