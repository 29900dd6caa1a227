//! Backtest orchestrator — dispatches by strategy name and aggregates.
//!
//! The only hard failure that crosses this boundary is an unrecognized
//! strategy name. Everything else — warm-up gaps, malformed conditions,
//! too little history — degrades to "no trade" and the run completes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Bar, Summary, Trade};
use crate::strategy::{self, StrategyConfig};

/// The closed set of built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    TrendCross,
    BuyHold,
    Breakout,
    Custom,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::TrendCross,
        Strategy::BuyHold,
        Strategy::Breakout,
        Strategy::Custom,
    ];

    /// Resolve a strategy identifier string.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "trend-cross" => Ok(Strategy::TrendCross),
            "buy-hold" => Ok(Strategy::BuyHold),
            "breakout" => Ok(Strategy::Breakout),
            "custom" => Ok(Strategy::Custom),
            other => Err(EngineError::UnrecognizedStrategy(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::TrendCross => "trend-cross",
            Strategy::BuyHold => "buy-hold",
            Strategy::Breakout => "breakout",
            Strategy::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unrecognized strategy: '{0}'")]
    UnrecognizedStrategy(String),
}

/// The combined result of a backtest: the closed-trade ledger in close
/// order plus its summary reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    pub trades: Vec<Trade>,
    pub summary: Summary,
}

/// Run a backtest by strategy name.
///
/// `config` only matters for the custom strategy; the built-ins ignore it.
/// Stateless and referentially transparent: identical inputs yield
/// identical output.
pub fn run_backtest(
    bars: &[Bar],
    strategy_name: &str,
    config: Option<&StrategyConfig>,
) -> Result<BacktestReport, EngineError> {
    let strategy = Strategy::from_name(strategy_name)?;
    Ok(run_strategy(bars, strategy, config))
}

/// Run a backtest for an already-resolved strategy.
pub fn run_strategy(
    bars: &[Bar],
    strategy: Strategy,
    config: Option<&StrategyConfig>,
) -> BacktestReport {
    let trades = match strategy {
        Strategy::TrendCross => strategy::trend_cross::run(bars),
        Strategy::BuyHold => strategy::buy_hold::run(bars),
        Strategy::Breakout => strategy::breakout::run(bars),
        Strategy::Custom => {
            let default = StrategyConfig::default();
            strategy::custom::run(bars, config.unwrap_or(&default))
        }
    };
    let summary = Summary::from_trades(&trades);
    BacktestReport { trades, summary }
}
