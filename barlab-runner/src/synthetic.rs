//! Seeded synthetic bar generator.
//!
//! A geometric random walk with intrabar range, for exercising strategies
//! without a data file. Deterministic for a given seed; results produced on
//! synthetic data carry no market meaning.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use barlab_core::domain::Bar;

const BASE_TIME: i64 = 1_600_000_000;
const BAR_SECONDS: i64 = 3600;

/// Generate `count` hourly bars from a seeded random walk starting at 100.
pub fn synthetic_bars(count: usize, seed: u64) -> Vec<Bar> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut close = 100.0_f64;

    (0..count)
        .map(|i| {
            let open = close;
            let ret: f64 = rng.gen_range(-0.02..0.02);
            close = (open * (1.0 + ret)).max(0.01);

            let span_up: f64 = rng.gen_range(0.0..0.005);
            let span_down: f64 = rng.gen_range(0.0..0.005);
            Bar {
                time: BASE_TIME + i as i64 * BAR_SECONDS,
                open,
                high: open.max(close) * (1.0 + span_up),
                low: (open.min(close) * (1.0 - span_down)).max(0.01),
                close,
                volume: rng.gen_range(500.0..5000.0),
            }
        })
        .collect()
}
