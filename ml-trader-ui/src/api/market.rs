//! Market data wire types and request helpers.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::client::RequestOptions;
use crate::chart::OhlcRecord;

/// Range query over a symbol's bars
pub const MARKET_DATA_ENDPOINT: &str = "/data/market/";

/// Most recent bar for a symbol
pub const LATEST_MARKET_DATA_ENDPOINT: &str = "/data/market/latest";

/// One bar as returned by the market data API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub adjusted_close: Option<f64>,
}

impl MarketData {
    /// Convert to a chart record. Daily bars keep just the date.
    pub fn to_ohlc(&self) -> OhlcRecord {
        OhlcRecord {
            time: chart_time(&self.timestamp),
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        }
    }
}

fn chart_time(ts: &DateTime<Utc>) -> String {
    if ts.hour() == 0 && ts.minute() == 0 && ts.second() == 0 {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Convert a batch of bars, preserving order
pub fn to_ohlc_series(bars: &[MarketData]) -> Vec<OhlcRecord> {
    bars.iter().map(MarketData::to_ohlc).collect()
}

/// Options for `GET /data/market/` with an optional date window
pub fn market_data_options(
    symbol: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> RequestOptions {
    let mut options = RequestOptions::get().query("symbol", normalize_symbol(symbol));
    if let Some(start) = start {
        options = options.query("start_date", start.format("%Y-%m-%dT00:00:00").to_string());
    }
    if let Some(end) = end {
        options = options.query("end_date", end.format("%Y-%m-%dT23:59:59").to_string());
    }
    options
}

/// Options for `GET /data/market/latest`
pub fn latest_market_data_options(symbol: &str) -> RequestOptions {
    RequestOptions::get().query("symbol", normalize_symbol(symbol))
}

/// Trimmed, upper-cased ticker
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}
