//! Price and time scale math.
//!
//! Pure functions so the canvas backend stays a thin drawing layer.

use super::series::OhlcRecord;

/// Plot area inside the surface, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Width of the price axis on the right edge
pub const PRICE_AXIS_WIDTH: f64 = 64.0;
/// Height of the time axis on the bottom edge
pub const TIME_AXIS_HEIGHT: f64 = 28.0;
const TOP_MARGIN: f64 = 8.0;

impl PlotArea {
    pub fn for_surface(width: f64, height: f64) -> Self {
        Self {
            left: 0.0,
            top: TOP_MARGIN,
            width: (width - PRICE_AXIS_WIDTH).max(1.0),
            height: (height - TOP_MARGIN - TIME_AXIS_HEIGHT).max(1.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Vertical price range with padding applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    pub min: f64,
    pub max: f64,
}

impl PriceScale {
    /// Range over all finite bars, padded by 10% on each side.
    ///
    /// `None` when no bar has finite prices.
    pub fn from_records(records: &[OhlcRecord]) -> Option<Self> {
        let (min, max) = records
            .iter()
            .filter(|r| r.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.low).min(r.high), hi.max(r.high).max(r.low))
            });

        if !min.is_finite() || !max.is_finite() {
            return None;
        }

        let range = max - min;
        let padding = if range > 0.0 { range * 0.1 } else { 1.0 };

        Some(Self {
            min: min - padding,
            max: max + padding,
        })
    }

    pub fn price_to_y(&self, price: f64, area: &PlotArea) -> f64 {
        area.top + (self.max - price) / (self.max - self.min) * area.height
    }

    /// `count + 1` evenly spaced prices from max down to min
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        (0..=count)
            .map(|i| self.max - (i as f64 / count as f64) * (self.max - self.min))
            .collect()
    }
}

/// Visible window over bar indices; `from`/`to` are bar centers and may be
/// fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRange {
    pub from: f64,
    pub to: f64,
}

impl VisibleRange {
    /// Whole series with half a bar of slack on both ends
    pub fn fit(len: usize) -> Self {
        Self {
            from: -0.5,
            to: len.max(1) as f64 - 0.5,
        }
    }

    pub fn span(&self) -> f64 {
        (self.to - self.from).max(f64::EPSILON)
    }
}

/// Maps bar indices onto the horizontal axis of a plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub range: VisibleRange,
    pub area: PlotArea,
}

impl TimeScale {
    pub fn new(range: VisibleRange, area: PlotArea) -> Self {
        Self { range, area }
    }

    /// Horizontal distance between neighbouring bars
    pub fn bar_spacing(&self) -> f64 {
        self.area.width / self.range.span()
    }

    pub fn index_to_x(&self, index: usize) -> f64 {
        self.area.left + (index as f64 - self.range.from) * self.bar_spacing()
    }

    /// Candle body width, never thinner than one pixel
    pub fn body_width(&self) -> f64 {
        (self.bar_spacing() * 0.7).max(1.0)
    }

    /// Indices of bars whose center falls inside the plot area
    pub fn visible_indices(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.range.from.ceil().max(0.0) as usize;
        let end = (self.range.to.floor() + 1.0).max(0.0) as usize;
        start.min(len)..end.min(len)
    }

    /// Label every `n`th bar so labels are at least `min_gap` pixels apart
    pub fn label_step(&self, min_gap: f64) -> usize {
        let spacing = self.bar_spacing();
        if spacing <= 0.0 {
            return 1;
        }
        ((min_gap / spacing).ceil() as usize).max(1)
    }
}
