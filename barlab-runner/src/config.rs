//! Serializable backtest configuration with boundary validation.
//!
//! The core engine deliberately does not validate condition configuration:
//! a malformed condition surfaces as "undefined operand -> condition
//! false", silently suppressing entries. This module is the explicit
//! validation step at the boundary — hard errors for configs that cannot
//! mean anything, warnings for configs the engine will silently ignore.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use barlab_core::engine::Strategy;
use barlab_core::strategy::{Condition, IndicatorKind, StrategyConfig};

/// Errors from the configuration layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// TOML run configuration.
///
/// ```toml
/// [backtest]
/// strategy = "custom"
/// take_profit = 5.0
/// stop_loss = 2.0
///
/// [[backtest.conditions]]
/// left = "SMA"
/// left_param = 5
/// operator = "Above"
/// right = "SMA"
/// right_param = 20
/// ```
///
/// `take_profit` and `stop_loss` are absolute price-unit deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    pub backtest: BacktestSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSection {
    pub strategy: String,
    #[serde(default)]
    pub take_profit: f64,
    #[serde(default)]
    pub stop_loss: f64,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl BacktestConfig {
    /// Minimal config for a built-in strategy.
    pub fn for_strategy(name: &str) -> Self {
        Self {
            backtest: BacktestSection {
                strategy: name.to_string(),
                take_profit: 0.0,
                stop_loss: 0.0,
                conditions: Vec::new(),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate at the boundary. Returns warnings for configuration the
    /// engine accepts but silently ignores; errors for configuration that
    /// cannot run at all.
    pub fn validate(&self) -> Result<Vec<String>, ConfigError> {
        let strategy = Strategy::from_name(&self.backtest.strategy)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        for (label, value) in [
            ("take_profit", self.backtest.take_profit),
            ("stop_loss", self.backtest.stop_loss),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{label} must be finite and >= 0, got {value}"
                )));
            }
        }

        let mut warnings = Vec::new();

        for (idx, cond) in self.backtest.conditions.iter().enumerate() {
            for (side, kind, param) in [
                ("left", cond.left, cond.left_param),
                ("right", cond.right, cond.right_param),
            ] {
                if param == 0 {
                    return Err(ConfigError::Invalid(format!(
                        "condition {idx}: {side} param must be >= 1"
                    )));
                }
                if kind == IndicatorKind::Ema {
                    warnings.push(format!(
                        "condition {idx}: EMA is not resolved by the evaluator; \
                         this condition will never hold and entries will not fire"
                    ));
                }
            }
        }

        if strategy != Strategy::Custom
            && (!self.backtest.conditions.is_empty()
                || self.backtest.take_profit > 0.0
                || self.backtest.stop_loss > 0.0)
        {
            warnings.push(format!(
                "conditions and thresholds are ignored by the '{strategy}' strategy"
            ));
        }

        Ok(warnings)
    }

    /// Extract the engine-facing strategy config.
    pub fn to_strategy_config(&self) -> StrategyConfig {
        StrategyConfig {
            take_profit: self.backtest.take_profit,
            stop_loss: self.backtest.stop_loss,
            conditions: self.backtest.conditions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barlab_core::strategy::ConditionOp;

    const CUSTOM_TOML: &str = r#"
[backtest]
strategy = "custom"
take_profit = 5.0
stop_loss = 2.0

[[backtest.conditions]]
left = "SMA"
left_param = 5
operator = "Above"
right = "SMA"
right_param = 20
"#;

    #[test]
    fn parses_custom_config() {
        let config = BacktestConfig::from_toml(CUSTOM_TOML).unwrap();
        assert_eq!(config.backtest.strategy, "custom");
        assert_eq!(config.backtest.take_profit, 5.0);
        assert_eq!(config.backtest.conditions.len(), 1);
        let cond = &config.backtest.conditions[0];
        assert_eq!(cond.left, IndicatorKind::Sma);
        assert_eq!(cond.operator, ConditionOp::Above);
        assert_eq!(cond.right_param, 20);
    }

    #[test]
    fn minimal_builtin_config() {
        let config = BacktestConfig::from_toml("[backtest]\nstrategy = \"buy-hold\"\n").unwrap();
        assert!(config.validate().unwrap().is_empty());
        assert_eq!(config.backtest.take_profit, 0.0);
    }

    #[test]
    fn unknown_strategy_is_invalid() {
        let config = BacktestConfig::for_strategy("ma_cross");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ma_cross"));
    }

    #[test]
    fn negative_stop_loss_is_invalid() {
        let mut config = BacktestConfig::from_toml(CUSTOM_TOML).unwrap();
        config.backtest.stop_loss = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_period_is_invalid() {
        let mut config = BacktestConfig::from_toml(CUSTOM_TOML).unwrap();
        config.backtest.conditions[0].left_param = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn ema_operand_warns_but_passes() {
        let mut config = BacktestConfig::from_toml(CUSTOM_TOML).unwrap();
        config.backtest.conditions[0].left = IndicatorKind::Ema;
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("EMA"));
    }

    #[test]
    fn builtin_with_conditions_warns() {
        let mut config = BacktestConfig::from_toml(CUSTOM_TOML).unwrap();
        config.backtest.strategy = "breakout".to_string();
        let warnings = config.validate().unwrap();
        assert!(warnings.iter().any(|w| w.contains("ignored")));
    }

    #[test]
    fn to_strategy_config_carries_fields() {
        let config = BacktestConfig::from_toml(CUSTOM_TOML).unwrap();
        let sc = config.to_strategy_config();
        assert_eq!(sc.take_profit, 5.0);
        assert_eq!(sc.stop_loss, 2.0);
        assert_eq!(sc.conditions.len(), 1);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            BacktestConfig::from_toml("not toml at all ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
