//! Bar — the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// One OHLCV sample for a fixed time interval (a kline/candle).
///
/// `time` is the bar's open time in epoch seconds. A bar sequence fed to
/// the engine is ordered by strictly increasing `time`; the engine assumes
/// but does not enforce this ordering. Gaps are tolerated, duplicates are
/// not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high is the top of the range, low the bottom,
    /// prices are positive.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}
