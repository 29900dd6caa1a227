//! Parabolic SAR — trend-following stop with an accelerating factor.
//!
//! Bar 0 only seeds the state (SAR = its low, extreme point = its high,
//! rising trend assumed), so output starts at index 1. Each bar the SAR
//! steps toward the extreme point by `af`; a price cross of the SAR flips
//! the trend, resets `af` to `step` and swaps the extreme point to the
//! current bar's opposite extreme. A new extreme in-trend bumps `af` by
//! `step`, capped at `max_step`. Lookback: 1.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct ParabolicSar {
    step: f64,
    max_step: f64,
    name: String,
}

impl ParabolicSar {
    pub fn new(step: f64, max_step: f64) -> Self {
        assert!(step > 0.0, "SAR step must be > 0");
        assert!(max_step >= step, "SAR max step must be >= step");
        Self {
            step,
            max_step,
            name: format!("psar_{step}_{max_step}"),
        }
    }

    /// Default parameters: step 0.02, max 0.20.
    pub fn default_params() -> Self {
        Self::new(0.02, 0.20)
    }
}

impl Indicator for ParabolicSar {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];

        if n < 2 {
            return result;
        }

        let mut is_up = true;
        let mut af = self.step;
        let mut ep = bars[0].high;
        let mut sar = bars[0].low;

        for i in 1..n {
            sar += af * (ep - sar);

            if is_up {
                if bars[i].low < sar {
                    // Price crossed below the stop: flip to downtrend.
                    is_up = false;
                    sar = ep;
                    ep = bars[i].low;
                    af = self.step;
                } else if bars[i].high > ep {
                    ep = bars[i].high;
                    af = (af + self.step).min(self.max_step);
                }
            } else if bars[i].high > sar {
                // Price crossed above the stop: flip to uptrend.
                is_up = true;
                sar = ep;
                ep = bars[i].high;
                af = self.step;
            } else if bars[i].low < ep {
                ep = bars[i].low;
                af = (af + self.step).min(self.max_step);
            }

            result[i] = sar;
        }

        result
    }
}
