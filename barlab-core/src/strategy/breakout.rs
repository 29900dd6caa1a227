//! Breakout strategy — 20-bar-high entry, SMA(20) exit.
//!
//! Scans from index 20 so the lookback window is always full. Enters when
//! the close exceeds the maximum high of the preceding 20 bars (the window
//! excludes the current bar); exits when the close falls below the 20-bar
//! SMA. Entry and exit are mutually exclusive on the same bar: a bar that
//! opens a position cannot also close it.

use super::{close_out, OpenPosition};
use crate::domain::{Bar, Trade};
use crate::indicators::{Indicator, Sma};

pub const PERIOD: usize = 20;

pub fn run(bars: &[Bar]) -> Vec<Trade> {
    let sma = Sma::new(PERIOD).compute(bars);

    let mut trades = Vec::new();
    let mut position: Option<OpenPosition> = None;

    for i in PERIOD..bars.len() {
        let close = bars[i].close;

        match position {
            None => {
                let window_high = bars[i - PERIOD..i]
                    .iter()
                    .map(|b| b.high)
                    .fold(f64::NEG_INFINITY, f64::max);
                if close > window_high {
                    position = Some(OpenPosition::open(&bars[i]));
                }
            }
            Some(pos) => {
                if !sma[i].is_nan() && close < sma[i] {
                    trades.push(pos.close(&bars[i]));
                    position = None;
                }
            }
        }
    }

    close_out(position, bars, &mut trades);
    trades
}
