//! Chart appearance options.

/// Chart height when the caller gives none, in CSS pixels
pub const DEFAULT_CHART_HEIGHT: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub background: String,
    pub text_color: String,
    pub font: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub vert_lines: String,
    pub horz_lines: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeScaleOptions {
    pub border_color: String,
}

/// Options a drawing surface is created with
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub height: u32,
    /// `None` means "as wide as the container"
    pub width: Option<u32>,
    pub layout: LayoutOptions,
    pub grid: GridOptions,
    pub time_scale: TimeScaleOptions,
}

impl ChartOptions {
    /// White background, light grey grid, grey axis border
    pub fn light(height: u32) -> Self {
        Self {
            height,
            width: None,
            layout: LayoutOptions {
                background: "#ffffff".to_string(),
                text_color: "#333".to_string(),
                font: "12px sans-serif".to_string(),
            },
            grid: GridOptions {
                vert_lines: "#f0f0f0".to_string(),
                horz_lines: "#f0f0f0".to_string(),
            },
            time_scale: TimeScaleOptions {
                border_color: "#d1d5db".to_string(),
            },
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::light(DEFAULT_CHART_HEIGHT)
    }
}

/// Candle colors
#[derive(Debug, Clone, PartialEq)]
pub struct CandlestickStyle {
    pub up_color: String,
    pub down_color: String,
    pub border_visible: bool,
    pub wick_up_color: String,
    pub wick_down_color: String,
}

impl Default for CandlestickStyle {
    fn default() -> Self {
        Self {
            up_color: "#4CAF50".to_string(),
            down_color: "#FF5252".to_string(),
            border_visible: false,
            wick_up_color: "#4CAF50".to_string(),
            wick_down_color: "#FF5252".to_string(),
        }
    }
}

impl CandlestickStyle {
    pub fn body_color(&self, up: bool) -> &str {
        if up {
            &self.up_color
        } else {
            &self.down_color
        }
    }

    pub fn wick_color(&self, up: bool) -> &str {
        if up {
            &self.wick_up_color
        } else {
            &self.wick_down_color
        }
    }
}
