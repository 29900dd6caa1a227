//! Backtest runner — wires together config, data, and the core engine.
//!
//! Two entry points:
//! - `run_single_backtest()`: one strategy from a validated config. Used by
//!   the CLI `run` command.
//! - `compare_strategies()`: the built-in strategies over the same bars in
//!   parallel. Safe because the core holds no shared mutable state and the
//!   bar slice is immutable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use barlab_core::domain::Bar;
use barlab_core::engine::{run_backtest, run_strategy, BacktestReport, EngineError, Strategy};
use barlab_core::strategy::StrategyConfig;

use crate::config::{BacktestConfig, ConfigError};
use crate::data_loader::LoadError;

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Complete result of a single backtest run: the core report wrapped with
/// provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub strategy: String,
    pub report: BacktestReport,
    pub bar_count: usize,
    /// BLAKE3 over the input bars.
    pub dataset_hash: String,
    /// Content-addressed id over (strategy, config, dataset).
    pub run_id: String,
    #[serde(default)]
    pub warnings: Vec<String>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Deterministic id for a run: two runs with identical strategy, config and
/// data share the same id and are interchangeable.
pub fn run_id(strategy: &str, config: &StrategyConfig, dataset_hash: &str) -> String {
    let payload = serde_json::json!({
        "strategy": strategy,
        "config": config,
        "dataset": dataset_hash,
    });
    let json = serde_json::to_string(&payload).expect("run id payload serialization failed");
    blake3::hash(json.as_bytes()).to_hex().to_string()
}

/// Run a single backtest from a validated config over pre-loaded bars.
pub fn run_single_backtest(
    config: &BacktestConfig,
    bars: &[Bar],
    dataset_hash: &str,
) -> Result<BacktestResult, RunError> {
    let warnings = config.validate()?;
    let strategy_config = config.to_strategy_config();
    let report = run_backtest(bars, &config.backtest.strategy, Some(&strategy_config))?;

    Ok(BacktestResult {
        schema_version: SCHEMA_VERSION,
        strategy: config.backtest.strategy.clone(),
        report,
        bar_count: bars.len(),
        dataset_hash: dataset_hash.to_string(),
        run_id: run_id(&config.backtest.strategy, &strategy_config, dataset_hash),
        warnings,
    })
}

/// The strategies `compare_strategies` runs: every built-in that needs no
/// user configuration.
pub const BUILT_IN: [Strategy; 3] = [Strategy::TrendCross, Strategy::BuyHold, Strategy::Breakout];

/// Run every built-in strategy over the same bars, in parallel.
///
/// Results come back in `BUILT_IN` order regardless of scheduling.
pub fn compare_strategies(bars: &[Bar], dataset_hash: &str) -> Vec<BacktestResult> {
    use rayon::prelude::*;

    BUILT_IN
        .par_iter()
        .map(|&strategy| {
            let report = run_strategy(bars, strategy, None);
            BacktestResult {
                schema_version: SCHEMA_VERSION,
                strategy: strategy.name().to_string(),
                bar_count: bars.len(),
                dataset_hash: dataset_hash.to_string(),
                run_id: run_id(strategy.name(), &StrategyConfig::default(), dataset_hash),
                warnings: Vec::new(),
                report,
            }
        })
        .collect()
}
