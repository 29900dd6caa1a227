//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[i] = close[i] * k + EMA[i-1] * (1 - k), k = 2 / (period + 1).
//! Seed: EMA[0] = close[0] — not an SMA of the first window, so there is no
//! warm-up gap and the series is defined from index 0. Lookback: 0.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "EMA period must be >= 1");
        Self {
            period,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n == 0 {
            return result;
        }

        let k = 2.0 / (self.period as f64 + 1.0);
        let mut prev = bars[0].close;
        result[0] = prev;

        for i in 1..n {
            let ema = bars[i].close * k + prev * (1.0 - k);
            result[i] = ema;
            prev = ema;
        }

        result
    }
}
