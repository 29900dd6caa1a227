//! Condition evaluator — a single comparison between two named,
//! parameterized indicator values at a bar index.
//!
//! Operands resolve against a cache of series precomputed once per run,
//! one per distinct (kind, param) pair. An undefined operand — unwarmed
//! index, missing series, or an EMA operand (accepted by configuration but
//! never resolved) — makes the condition false; evaluation never fails.

use serde::{Deserialize, Serialize};

use crate::domain::Bar;
use crate::indicators::{Indicator, IndicatorValues, Rsi, Sma};

/// Indicator families a condition operand may name.
///
/// `Ema` deserializes fine but the evaluator never materializes an EMA
/// series, so any EMA operand stays undefined and its condition false.
/// This preserved restriction is surfaced (as a warning) at the config
/// boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Rsi,
}

/// Comparison operators.
///
/// `Crosses` is an upward cross only; there is no symmetric downward
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOp {
    Above,
    Below,
    Crosses,
}

/// One comparison between two indicator values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub left: IndicatorKind,
    pub left_param: usize,
    pub operator: ConditionOp,
    pub right: IndicatorKind,
    pub right_param: usize,
}

impl Condition {
    /// Evaluate at bar index `i` against a prebuilt series cache.
    ///
    /// `Above`/`Below` are strict. `Crosses` needs both operands defined at
    /// `i` and `i-1` and is true iff previously left <= right and now
    /// left > right.
    pub fn evaluate(&self, cache: &IndicatorValues, i: usize) -> bool {
        let left = operand(cache, self.left, self.left_param, i);
        let right = operand(cache, self.right, self.right_param, i);
        if left.is_nan() || right.is_nan() {
            return false;
        }

        match self.operator {
            ConditionOp::Above => left > right,
            ConditionOp::Below => left < right,
            ConditionOp::Crosses => {
                if i == 0 {
                    return false;
                }
                let prev_left = operand(cache, self.left, self.left_param, i - 1);
                let prev_right = operand(cache, self.right, self.right_param, i - 1);
                if prev_left.is_nan() || prev_right.is_nan() {
                    return false;
                }
                prev_left <= prev_right && left > right
            }
        }
    }
}

/// Cache key for a (kind, param) pair, `None` for kinds the evaluator does
/// not resolve.
fn series_key(kind: IndicatorKind, param: usize) -> Option<String> {
    match kind {
        IndicatorKind::Sma => Some(format!("sma_{param}")),
        IndicatorKind::Rsi => Some(format!("rsi_{param}")),
        IndicatorKind::Ema => None,
    }
}

fn operand(cache: &IndicatorValues, kind: IndicatorKind, param: usize, i: usize) -> f64 {
    series_key(kind, param)
        .and_then(|key| cache.get(&key, i))
        .unwrap_or(f64::NAN)
}

/// Precompute one series per distinct (kind, param) operand referenced by
/// `conditions`. Built once per run; the bar loop only indexes into it.
///
/// A zero param never warms up; the series is left unmaterialized so the
/// condition stays false instead of panicking on a degenerate period.
pub fn build_condition_cache(bars: &[Bar], conditions: &[Condition]) -> IndicatorValues {
    let mut cache = IndicatorValues::new();

    for cond in conditions {
        for (kind, param) in [(cond.left, cond.left_param), (cond.right, cond.right_param)] {
            if param == 0 {
                continue;
            }
            let Some(key) = series_key(kind, param) else {
                continue;
            };
            if cache.contains(&key) {
                continue;
            }
            let series = match kind {
                IndicatorKind::Sma => Sma::new(param).compute(bars),
                IndicatorKind::Rsi => Rsi::new(param).compute(bars),
                IndicatorKind::Ema => continue,
            };
            cache.insert(key, series);
        }
    }

    cache
}
