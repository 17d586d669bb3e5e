//! OHLC records and series diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One candlestick: the four prices of a single time interval.
///
/// `time` identifies the interval (e.g. `2024-01-02`); a series uses one
/// format throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcRecord {
    pub fn new(time: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time: time.into(),
            open,
            high,
            low,
            close,
        }
    }

    /// Close at or above open
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }

    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }
}

/// Something odd about a series. Reported, never corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesIssue {
    /// `time` repeats an earlier record
    DuplicateTime { index: usize, time: String },
    /// `time` sorts before its predecessor
    OutOfOrder { index: usize, time: String },
    /// A price is NaN or infinite
    NonFinite { index: usize },
    /// `high` below `low`
    InvertedRange { index: usize },
}

/// Scan a series for the problems the renderer silently passes through.
///
/// Ordering is judged by string comparison, which holds for the ISO-style
/// times the API produces.
pub fn inspect_series(records: &[OhlcRecord]) -> Vec<SeriesIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if !seen.insert(record.time.as_str()) {
            issues.push(SeriesIssue::DuplicateTime {
                index,
                time: record.time.clone(),
            });
        } else if index > 0 && record.time < records[index - 1].time {
            issues.push(SeriesIssue::OutOfOrder {
                index,
                time: record.time.clone(),
            });
        }

        if !record.is_finite() {
            issues.push(SeriesIssue::NonFinite { index });
        } else if record.high < record.low {
            issues.push(SeriesIssue::InvertedRange { index });
        }
    }

    issues
}
