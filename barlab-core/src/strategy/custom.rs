//! Custom strategy — user-configured conditions with take-profit/stop-loss.
//!
//! Entry: every configured condition holds at the same bar (logical AND;
//! an empty condition list never triggers). Exit: while Long, the
//! unrealized profit `close - entry` is checked each bar against the
//! absolute take-profit and stop-loss deltas, take-profit first. The
//! indicator series behind the conditions are memoized once per run.

use super::condition::build_condition_cache;
use super::{close_out, OpenPosition, StrategyConfig};
use crate::domain::{Bar, Trade};

pub fn run(bars: &[Bar], config: &StrategyConfig) -> Vec<Trade> {
    let cache = build_condition_cache(bars, &config.conditions);

    let mut trades = Vec::new();
    let mut position: Option<OpenPosition> = None;

    for i in 1..bars.len() {
        if position.is_none()
            && !config.conditions.is_empty()
            && config.conditions.iter().all(|c| c.evaluate(&cache, i))
        {
            position = Some(OpenPosition::open(&bars[i]));
        }

        // The entry bar is checked too; its profit is zero, so neither
        // threshold can fire with a positive setting.
        if let Some(pos) = position {
            let profit = bars[i].close - pos.entry_price;
            if config.take_profit > 0.0 && profit >= config.take_profit {
                trades.push(pos.close(&bars[i]));
                position = None;
            } else if config.stop_loss > 0.0 && profit <= -config.stop_loss {
                trades.push(pos.close(&bars[i]));
                position = None;
            }
        }
    }

    close_out(position, bars, &mut trades);
    trades
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;
    use crate::strategy::{Condition, ConditionOp, IndicatorKind};

    fn sma_above(left_param: usize, right_param: usize) -> Condition {
        Condition {
            left: IndicatorKind::Sma,
            left_param,
            operator: ConditionOp::Above,
            right: IndicatorKind::Sma,
            right_param,
        }
    }

    fn config(take_profit: f64, stop_loss: f64, conditions: Vec<Condition>) -> StrategyConfig {
        StrategyConfig {
            take_profit,
            stop_loss,
            conditions,
        }
    }

    #[test]
    fn empty_conditions_never_trigger() {
        let bars = make_bars(&(0..30).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let trades = run(&bars, &config(5.0, 5.0, vec![]));
        assert!(trades.is_empty());
    }

    #[test]
    fn take_profit_cycle() {
        // Rising by 1 per bar. sma_2 > sma_4 from index 3 on, so the
        // strategy re-enters immediately after each take-profit exit:
        // entry 3 -> exit 8 (+5), entry 9 -> exit 14 (+5), entry 15 ->
        // forced out at 19 (+4).
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let trades = run(&bars, &config(5.0, 0.0, vec![sma_above(2, 4)]));

        assert_eq!(trades.len(), 3);

        assert_eq!(trades[0].entry_time, bars[3].time);
        assert_eq!(trades[0].exit_time, bars[8].time);
        assert!((trades[0].profit - 5.0).abs() < 1e-10);

        assert_eq!(trades[1].entry_time, bars[9].time);
        assert_eq!(trades[1].exit_time, bars[14].time);
        assert!((trades[1].profit - 5.0).abs() < 1e-10);

        assert_eq!(trades[2].entry_time, bars[15].time);
        assert_eq!(trades[2].exit_time, bars[19].time);
        assert!((trades[2].profit - 4.0).abs() < 1e-10);
    }

    #[test]
    fn stop_loss_cuts_losers() {
        // Falling by 1 per bar; sma_2 < sma_4 once defined.
        let closes: Vec<f64> = (0..12).map(|i| 100.0 - i as f64).collect();
        let bars = make_bars(&closes);
        let below = Condition {
            operator: ConditionOp::Below,
            ..sma_above(2, 4)
        };
        let trades = run(&bars, &config(0.0, 3.0, vec![below]));

        assert!(!trades.is_empty());
        // First trade: entry at bar 3 (close 97), stopped at bar 6 (close 94).
        assert_eq!(trades[0].entry_time, bars[3].time);
        assert_eq!(trades[0].exit_time, bars[6].time);
        assert!((trades[0].profit - -3.0).abs() < 1e-10);
    }

    #[test]
    fn disabled_thresholds_hold_to_end() {
        // tp = 0 and sl = 0 both disabled: one entry, force-closed at the
        // final bar.
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let trades = run(&bars, &config(0.0, 0.0, vec![sma_above(2, 4)]));

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].entry_time, bars[3].time);
        assert_eq!(trades[0].exit_time, bars[19].time);
    }

    #[test]
    fn all_conditions_must_hold() {
        // Rising series: sma_2 > sma_4 holds but sma_4 > sma_2 never does,
        // so the AND never fires.
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let trades = run(
            &bars,
            &config(5.0, 0.0, vec![sma_above(2, 4), sma_above(4, 2)]),
        );
        assert!(trades.is_empty());
    }

    #[test]
    fn crosses_condition_enters_once() {
        // Flat then rising: the upward cross happens on one bar only, and
        // with thresholds disabled the single entry rides to the end.
        let mut closes = vec![100.0; 10];
        closes.extend((1..=10).map(|i| 100.0 + i as f64));
        let bars = make_bars(&closes);
        let cross = Condition {
            operator: ConditionOp::Crosses,
            ..sma_above(2, 6)
        };
        let trades = run(&bars, &config(0.0, 0.0, vec![cross]));

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].exit_time, bars[bars.len() - 1].time);
    }

    #[test]
    fn ema_condition_suppresses_entries() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let bars = make_bars(&closes);
        let ema_cond = Condition {
            left: IndicatorKind::Ema,
            ..sma_above(5, 20)
        };
        let trades = run(&bars, &config(5.0, 0.0, vec![ema_cond]));
        assert!(trades.is_empty());
    }

    #[test]
    fn unwarmed_history_degrades_to_no_trades() {
        // Period exceeds available history: conditions stay false, run
        // completes with zero trades.
        let bars = make_bars(&[100.0, 101.0, 102.0]);
        let trades = run(&bars, &config(5.0, 0.0, vec![sma_above(10, 20)]));
        assert!(trades.is_empty());
    }
}
