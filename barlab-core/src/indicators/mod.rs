//! Indicator library.
//!
//! Indicators are pure functions: bar history in, numeric series out. Each
//! output series is aligned index-for-index with the input bars, with
//! `f64::NAN` marking unwarmed positions. Consumers must never treat NaN
//! as zero — a NaN operand makes a condition false and a signal inert.
//!
//! Series are precomputed once per run and queried by bar index through
//! `IndicatorValues`; nothing recomputes per bar.

use crate::domain::Bar;
use std::collections::HashMap;

pub mod bbi;
pub mod bollinger;
pub mod ema;
pub mod parabolic_sar;
pub mod rsi;
pub mod sma;

pub use bbi::Bbi;
pub use bollinger::{Bollinger, BollingerBand};
pub use ema::Ema;
pub use parabolic_sar::ParabolicSar;
pub use rsi::Rsi;
pub use sma::Sma;

/// Trait for indicators.
///
/// Indicators take a full bar series and produce a numeric series of the
/// same length. The first `lookback()` values are `f64::NAN` (warm-up).
///
/// No indicator value at bar t may depend on price data from bar t+1 or
/// later.
pub trait Indicator: Send + Sync {
    /// Cache key, e.g. "sma_20", "rsi_14".
    fn name(&self) -> &str;

    /// Number of leading bars for which the output is NaN.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire bar series.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;
}

/// Container for precomputed indicator series, keyed by indicator name.
///
/// Built once before the bar loop, then queried by bar index during it.
#[derive(Debug, Clone, Default)]
pub struct IndicatorValues {
    series: HashMap<String, Vec<f64>>,
}

impl IndicatorValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.series.insert(name.into(), values);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    /// Value at a bar index. `None` for an unknown series or an index past
    /// the end; a NaN value is returned as-is.
    pub fn get(&self, name: &str, bar_index: usize) -> Option<f64> {
        self.series.get(name).and_then(|v| v.get(bar_index).copied())
    }

    pub fn get_series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(|v| v.as_slice())
    }
}

/// Create synthetic bars from close prices for testing.
///
/// Hourly bars starting at a fixed epoch; open = previous close, high/low
/// bracket the open/close range, constant volume.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    const BASE_TIME: i64 = 1_700_000_000;
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                time: BASE_TIME + i as i64 * 3600,
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
