//! Trade — a completed round trip — and the summary reduction over a ledger.

use serde::{Deserialize, Serialize};

/// A closed round-trip trade: entry at one bar's close, exit at a later
/// bar's close. Each trade is a single unit of the instrument — no sizing,
/// fees, slippage or leverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub entry_time: i64,
    pub entry_price: f64,
    pub exit_time: i64,
    pub exit_price: f64,
    /// `exit_price - entry_price`.
    pub profit: f64,
}

impl Trade {
    pub fn is_winner(&self) -> bool {
        self.profit > 0.0
    }
}

/// Aggregate statistics over a trade ledger.
///
/// A zero-profit trade counts as a loss, not a separate category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_profit: f64,
}

impl Summary {
    /// Pure reduction over a closed-trade sequence: counts, win/loss split
    /// (ties are losses), and the simple profit sum (no compounding).
    pub fn from_trades(trades: &[Trade]) -> Self {
        let wins = trades.iter().filter(|t| t.profit > 0.0).count();
        Self {
            trades: trades.len(),
            wins,
            losses: trades.len() - wins,
            total_profit: trades.iter().map(|t| t.profit).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(profit: f64) -> Trade {
        Trade {
            entry_time: 1_000,
            entry_price: 100.0,
            exit_time: 2_000,
            exit_price: 100.0 + profit,
            profit,
        }
    }

    #[test]
    fn empty_ledger() {
        let summary = Summary::from_trades(&[]);
        assert_eq!(summary.trades, 0);
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.losses, 0);
        assert_eq!(summary.total_profit, 0.0);
    }

    #[test]
    fn wins_and_losses_split() {
        let ledger = [trade(5.0), trade(-3.0), trade(2.5)];
        let summary = Summary::from_trades(&ledger);
        assert_eq!(summary.trades, 3);
        assert_eq!(summary.wins, 2);
        assert_eq!(summary.losses, 1);
        assert!((summary.total_profit - 4.5).abs() < 1e-10);
    }

    #[test]
    fn zero_profit_counts_as_loss() {
        let summary = Summary::from_trades(&[trade(0.0)]);
        assert_eq!(summary.wins, 0);
        assert_eq!(summary.losses, 1);
    }

    #[test]
    fn is_winner_strict() {
        assert!(trade(0.01).is_winner());
        assert!(!trade(0.0).is_winner());
        assert!(!trade(-0.01).is_winner());
    }

    #[test]
    fn summary_serialization_roundtrip() {
        let summary = Summary::from_trades(&[trade(1.0), trade(-1.0)]);
        let json = serde_json::to_string(&summary).unwrap();
        let deser: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deser);
    }
}
