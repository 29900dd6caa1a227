//! Relative Strength Index (RSI) — trailing-sum variant.
//!
//! Maintains running gain/loss sums over a trailing window of `period`
//! price changes with incremental add/remove. Not the Wilder-smoothed
//! form: the window is a plain trailing sum, so values react faster and
//! a pure-gain window pins RS at 100 rather than diverging.
//!
//! RS = avg_gain / avg_loss, or 100 when the loss sum is zero.
//! RSI = 100 - 100 / (1 + RS). Lookback: period.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        let mut gain = 0.0;
        let mut loss = 0.0;

        for i in 1..n {
            let change = bars[i].close - bars[i - 1].close;
            if change > 0.0 {
                gain += change;
            } else if change < 0.0 {
                loss -= change;
            }

            if i >= self.period {
                let avg_gain = gain / self.period as f64;
                let avg_loss = loss / self.period as f64;
                let rs = if avg_loss == 0.0 {
                    100.0
                } else {
                    avg_gain / avg_loss
                };
                result[i] = 100.0 - 100.0 / (1.0 + rs);

                // Slide the window: drop the oldest change.
                let old = bars[i - self.period + 1].close - bars[i - self.period].close;
                if old > 0.0 {
                    gain -= old;
                } else if old < 0.0 {
                    loss += old;
                }
            }
        }

        result
    }
}
