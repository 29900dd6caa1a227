//! Strategy executors — {Flat, Long} state machines over a bar sequence.
//!
//! Each executor is a pure function taking the bar slice (plus config where
//! relevant) and returning the closed trades in the order they closed. The
//! open position is a local variable inside the executor; there is no
//! shared or global position state.
//!
//! Common contract: the initial state is Flat, at most one position is open
//! at a time (no pyramiding, no shorting), and a position still open at the
//! end of data is force-closed at the final bar's close — no executor ends
//! with an open position in its result.

pub mod breakout;
pub mod buy_hold;
pub mod condition;
pub mod custom;
pub mod trend_cross;

pub use condition::{Condition, ConditionOp, IndicatorKind};

use crate::domain::{Bar, Trade};
use serde::{Deserialize, Serialize};

/// Configuration for the custom strategy.
///
/// `take_profit` and `stop_loss` are absolute price-unit deltas, not
/// percentages; zero disables the threshold. Entry fires when every
/// condition holds at the same bar; an empty condition list never triggers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrategyConfig {
    #[serde(default)]
    pub take_profit: f64,
    #[serde(default)]
    pub stop_loss: f64,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Ephemeral state held while a trade is open.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenPosition {
    pub entry_price: f64,
    pub entry_time: i64,
}

impl OpenPosition {
    /// Enter at the bar's close.
    pub fn open(bar: &Bar) -> Self {
        Self {
            entry_price: bar.close,
            entry_time: bar.time,
        }
    }

    /// Exit at the bar's close.
    pub fn close(self, bar: &Bar) -> Trade {
        Trade {
            entry_time: self.entry_time,
            entry_price: self.entry_price,
            exit_time: bar.time,
            exit_price: bar.close,
            profit: bar.close - self.entry_price,
        }
    }
}

/// Mark-to-market liquidation at the end of data.
pub(crate) fn close_out(position: Option<OpenPosition>, bars: &[Bar], trades: &mut Vec<Trade>) {
    if let (Some(pos), Some(last)) = (position, bars.last()) {
        trades.push(pos.close(last));
    }
}
