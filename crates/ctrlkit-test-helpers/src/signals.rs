//! Deterministic excitation signals for filter and controller tests.
//!
//! Every generator is seeded or closed-form, so a failing property test
//! replays identically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `len` samples of `before`, switching to `after` at index `at`.
pub fn step(len: usize, at: usize, before: f32, after: f32) -> Vec<f32> {
    (0..len)
        .map(|i| if i < at { before } else { after })
        .collect()
}

/// `len` samples rising linearly from `start` by `slope` per sample.
pub fn ramp(len: usize, start: f32, slope: f32) -> Vec<f32> {
    (0..len).map(|i| start + slope * i as f32).collect()
}

/// Sampled sine of `freq_hz` at `sample_hz`.
pub fn sine(len: usize, amplitude: f32, freq_hz: f32, sample_hz: f32) -> Vec<f32> {
    let w = core::f32::consts::TAU * freq_hz / sample_hz;
    (0..len).map(|i| amplitude * (w * i as f32).sin()).collect()
}

/// `base` plus uniform noise in `[-amplitude, amplitude)`, from a fixed seed.
pub fn noisy(len: usize, base: f32, amplitude: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if amplitude > 0.0 {
                base + rng.random_range(-amplitude..amplitude)
            } else {
                base
            }
        })
        .collect()
}

/// Constant `base` with an isolated spike of height `spike` every `period`
/// samples.
pub fn spiky(len: usize, base: f32, spike: f32, period: usize) -> Vec<f32> {
    let period = period.max(1);
    (0..len)
        .map(|i| if i % period == period - 1 { spike } else { base })
        .collect()
}

/// Non-finite and extreme values the hot path must tolerate.
pub fn hostile() -> [f32; 8] {
    [
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::MAX,
        f32::MIN,
        f32::MIN_POSITIVE,
        -0.0,
        1.0e-40,
    ]
}
