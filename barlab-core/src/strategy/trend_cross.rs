//! Trend-cross strategy — SMA 30/90 golden/death cross pair.
//!
//! Enters when the short SMA crosses from <= to > the long SMA between the
//! previous and current bar; exits on the symmetric downward cross. Only
//! one signal type is actionable per state: entry signals are ignored while
//! Long, exit signals while Flat.

use super::{close_out, OpenPosition};
use crate::domain::{Bar, Trade};
use crate::indicators::{Indicator, Sma};

pub const FAST_PERIOD: usize = 30;
pub const SLOW_PERIOD: usize = 90;

pub fn run(bars: &[Bar]) -> Vec<Trade> {
    let fast = Sma::new(FAST_PERIOD).compute(bars);
    let slow = Sma::new(SLOW_PERIOD).compute(bars);

    let mut trades = Vec::new();
    let mut position: Option<OpenPosition> = None;

    for i in 1..bars.len() {
        let (prev_fast, prev_slow) = (fast[i - 1], slow[i - 1]);
        let (cur_fast, cur_slow) = (fast[i], slow[i]);
        if prev_fast.is_nan() || prev_slow.is_nan() || cur_fast.is_nan() || cur_slow.is_nan() {
            continue;
        }

        match position {
            None => {
                if prev_fast <= prev_slow && cur_fast > cur_slow {
                    position = Some(OpenPosition::open(&bars[i]));
                }
            }
            Some(pos) => {
                if prev_fast >= prev_slow && cur_fast < cur_slow {
                    trades.push(pos.close(&bars[i]));
                    position = None;
                }
            }
        }
    }

    close_out(position, bars, &mut trades);
    trades
}
