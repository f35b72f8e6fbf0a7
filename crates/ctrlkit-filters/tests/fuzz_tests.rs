//! Fuzzing Tests for Filters
//!
//! This module contains fuzzing tests that verify filter robustness
//! against extreme and edge-case inputs including NaN and Infinity.
//! Filters are allowed to propagate non-finite values but must never panic,
//! and must recover once reset.

use ctrlkit_filters::prelude::*;
use ctrlkit_test_helpers::signals;

fn all_filters() -> Vec<Box<dyn Filter>> {
    vec![
        Box::new(LowPass::default()),
        Box::new(MovingAverage::<10>::new()),
        Box::new(Median::<5>::new()),
        Box::new(Kalman::default()),
        Box::new(Butterworth::default()),
        Box::new(SlewRateLimiter::default()),
        Box::new(LimitAverage::<10>::default()),
    ]
}

#[cfg(test)]
mod fuzz_tests {
    use super::*;

    #[test]
    fn fuzz_hostile_inputs_do_not_panic() {
        for mut filter in all_filters() {
            for x in signals::hostile() {
                let _ = filter.update(x);
            }
            for x in signals::hostile().iter().rev() {
                let _ = filter.update(*x);
            }
        }
    }

    #[test]
    fn fuzz_nan_first_sample() {
        for mut filter in all_filters() {
            let _ = filter.update(f32::NAN);
            let _ = filter.update(1.0);
        }
    }

    #[test]
    fn fuzz_reset_recovers_from_nan() {
        for mut filter in all_filters() {
            filter.update(1.0);
            filter.update(f32::NAN);
            filter.update(f32::INFINITY);
            filter.reset();
            let out = filter.update(2.0);
            assert!(
                (out - 2.0).abs() < 1e-6,
                "{filter:?} did not recover after reset: {out}"
            );
        }
    }

    #[test]
    fn fuzz_median_with_many_nans() {
        let mut med = Median::<5>::new();
        for _ in 0..5 {
            med.update(f32::NAN);
        }
        assert!(med.update(f32::NAN).is_nan());
        for _ in 0..5 {
            med.update(3.0);
        }
        assert!((med.update(3.0) - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fuzz_median_rejects_isolated_infinity() {
        let mut med = Median::<5>::new();
        for x in [1.0, 1.0, f32::INFINITY, 1.0, 1.0] {
            let out = med.update(x);
            assert!(out.is_finite());
        }
    }

    #[test]
    fn fuzz_slew_limiter_infinite_target() {
        let mut limiter = SlewRateLimiter::per_tick(0.5);
        limiter.update(0.0);
        let out = limiter.update(f32::INFINITY);
        assert!((out - 0.5).abs() < f32::EPSILON);
        let out = limiter.update(f32::NEG_INFINITY);
        assert!(out.abs() < f32::EPSILON);
    }

    #[test]
    fn fuzz_extreme_but_finite_stays_finite() {
        let mut lp = LowPass::new(0.5);
        let mut kf = Kalman::default();
        for x in [1.0e30, -1.0e30, 1.0e30, -1.0e30] {
            assert!(lp.update(x).is_finite());
            assert!(kf.update(x).is_finite());
        }
    }

    #[test]
    fn fuzz_spec_rejects_non_finite_parameters() {
        let specs = [
            FilterSpec::LowPass { alpha: f32::NAN },
            FilterSpec::Kalman {
                q: f32::INFINITY,
                r: 0.1,
                initial: None,
            },
            FilterSpec::Kalman {
                q: 0.01,
                r: 0.1,
                initial: Some(f32::NAN),
            },
            FilterSpec::Butterworth {
                cutoff_hz: f32::NAN,
                sample_hz: 100.0,
            },
            FilterSpec::SlewRate {
                max_delta: f32::INFINITY,
            },
            FilterSpec::LimitAverage {
                max_delta: f32::NEG_INFINITY,
            },
        ];
        for spec in specs {
            assert!(spec.build().is_err(), "{spec:?} should be rejected");
        }
    }
}
