//! Buy-and-hold strategy — the degenerate baseline.
//!
//! Fewer than two bars: no trades. Otherwise exactly one trade, opened at
//! bar 0's close and closed at the last bar's close, unconditionally.

use super::OpenPosition;
use crate::domain::{Bar, Trade};

pub fn run(bars: &[Bar]) -> Vec<Trade> {
    if bars.len() < 2 {
        return Vec::new();
    }
    vec![OpenPosition::open(&bars[0]).close(&bars[bars.len() - 1])]
}
