//! BBI — Bull and Bear Index.
//!
//! Arithmetic mean of SMA(3), SMA(6), SMA(12) and SMA(24) at each aligned
//! index. Alignment is naive index-matching, not warm-up trimming: while
//! any component SMA is still NaN the mean is NaN too, so the series is
//! undefined before index 23. Lookback: 23.

use super::{Indicator, Sma};
use crate::domain::Bar;

const PERIODS: [usize; 4] = [3, 6, 12, 24];

#[derive(Debug, Clone)]
pub struct Bbi {
    name: String,
}

impl Bbi {
    pub fn new() -> Self {
        Self {
            name: "bbi".to_string(),
        }
    }
}

impl Default for Bbi {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for Bbi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        PERIODS[3] - 1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let components: Vec<Vec<f64>> = PERIODS
            .iter()
            .map(|&p| Sma::new(p).compute(bars))
            .collect();

        // NaN in any component propagates through the sum.
        (0..n)
            .map(|i| components.iter().map(|s| s[i]).sum::<f64>() / PERIODS.len() as f64)
            .collect()
    }
}
