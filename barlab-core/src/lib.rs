//! BarLab Core — deterministic backtesting engine over OHLCV bar sequences.
//!
//! This crate contains the heart of the backtester:
//! - Domain types (bars, trades, summaries)
//! - Indicator library (SMA, EMA, RSI, Bollinger Bands, Parabolic SAR, BBI)
//! - Condition evaluator for user-defined strategies
//! - Four strategy executors as {Flat, Long} state machines
//! - Orchestrator dispatching by strategy name
//!
//! The engine is synchronous and pure: it consumes an already-assembled,
//! time-ordered bar sequence and returns a trade ledger plus summary. It
//! performs no I/O, holds no global state, and is safe to invoke from
//! multiple threads provided each invocation gets its own inputs.

pub mod domain;
pub mod engine;
pub mod indicators;
pub mod strategy;

pub use domain::{Bar, Summary, Trade};
pub use engine::{run_backtest, BacktestReport, EngineError, Strategy};
pub use strategy::{Condition, ConditionOp, IndicatorKind, StrategyConfig};
