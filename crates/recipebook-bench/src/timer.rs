use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::config::BenchConfig;

/// Time `op` the way `BenchConfig` describes: `repeat` repetitions of
/// `number` calls each, returning the fastest repetition's total.
///
/// Returns zero when `repeat` is zero.
pub fn min_of_repeats<R, F>(config: &BenchConfig, mut op: F) -> Duration
where
    F: FnMut() -> R,
{
    (0..config.repeat)
        .map(|_| {
            let start = Instant::now();
            for _ in 0..config.number {
                black_box(op());
            }
            start.elapsed()
        })
        .min()
        .unwrap_or_default()
}
