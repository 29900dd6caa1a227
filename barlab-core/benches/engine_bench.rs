//! Criterion benchmarks for BarLab hot paths.
//!
//! Benchmarks:
//! 1. Indicator precompute (SMA, RSI, Bollinger, Parabolic SAR, BBI)
//! 2. Full backtest per strategy
//! 3. Custom-strategy condition evaluation over the bar loop

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use barlab_core::domain::Bar;
use barlab_core::engine::{run_strategy, Strategy};
use barlab_core::indicators::{Bbi, Bollinger, Indicator, ParabolicSar, Rsi, Sma};
use barlab_core::strategy::{Condition, ConditionOp, IndicatorKind, StrategyConfig};

fn make_bars(n: usize) -> Vec<Bar> {
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                time: 1_700_000_000 + i as i64 * 3600,
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000.0 + (i % 500) as f64,
            }
        })
        .collect()
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_precompute");

    for &bar_count in &[252, 1260, 2520] {
        let bars = make_bars(bar_count);

        group.bench_with_input(BenchmarkId::new("sma_20", bar_count), &bar_count, |b, _| {
            let sma = Sma::new(20);
            b.iter(|| sma.compute(black_box(&bars)));
        });

        let full_stack: Vec<Box<dyn Indicator>> = vec![
            Box::new(Sma::new(30)),
            Box::new(Sma::new(90)),
            Box::new(Rsi::new(14)),
            Box::new(Bollinger::upper(20, 2.0)),
            Box::new(Bollinger::lower(20, 2.0)),
            Box::new(ParabolicSar::default_params()),
            Box::new(Bbi::new()),
        ];
        group.bench_with_input(
            BenchmarkId::new("full_stack_7", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| {
                    for ind in &full_stack {
                        black_box(ind.compute(black_box(&bars)));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtest");

    let bars = make_bars(2520);
    for strategy in [Strategy::TrendCross, Strategy::BuyHold, Strategy::Breakout] {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| run_strategy(black_box(&bars), strategy, None));
        });
    }

    group.finish();
}

fn bench_custom(c: &mut Criterion) {
    let mut group = c.benchmark_group("custom_strategy");

    let bars = make_bars(2520);
    let config = StrategyConfig {
        take_profit: 5.0,
        stop_loss: 3.0,
        conditions: vec![
            Condition {
                left: IndicatorKind::Sma,
                left_param: 5,
                operator: ConditionOp::Above,
                right: IndicatorKind::Sma,
                right_param: 20,
            },
            Condition {
                left: IndicatorKind::Rsi,
                left_param: 14,
                operator: ConditionOp::Below,
                right: IndicatorKind::Rsi,
                right_param: 28,
            },
        ],
    };

    group.bench_function("two_conditions_2520_bars", |b| {
        b.iter(|| run_strategy(black_box(&bars), Strategy::Custom, Some(black_box(&config))));
    });

    group.finish();
}

criterion_group!(benches, bench_indicators, bench_strategies, bench_custom);
criterion_main!(benches);
