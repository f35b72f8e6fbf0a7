//! Fuzzing Tests for PID Controllers
//!
//! Hostile measurements, setpoints and tunings must never panic. Non-finite
//! values may propagate to the output, but a reset with sane inputs must
//! bring the controller back.

use ctrlkit_filters::{Kalman, Median};
use ctrlkit_pid::prelude::*;
use ctrlkit_test_helpers::logging::init_test_tracing;
use ctrlkit_test_helpers::signals;

fn filtered_positional() -> PositionalPid {
    let cfg = PidConfig::default()
        .with_gains(2.0, 1.0, 0.05)
        .with_output_limits(-10.0, 10.0)
        .with_integral_limits(-5.0, 5.0)
        .with_deadband(0.01);
    let mut pid = PositionalPid::new(cfg);
    pid.set_feedback_filter(Median::<5>::new());
    pid.set_derivative_filter(Kalman::default());
    pid
}

#[cfg(test)]
mod fuzz_tests {
    use super::*;

    #[test]
    fn fuzz_hostile_feedback_positional() {
        for derivative_on_measurement in [false, true] {
            let mut pid = filtered_positional();
            let cfg = pid.config().with_derivative_on_measurement(derivative_on_measurement);
            pid.init(Some(&cfg));
            pid.set_setpoint(1.0);
            for y in signals::hostile() {
                let _ = pid.update(y);
            }
        }
    }

    #[test]
    fn fuzz_hostile_setpoints() {
        let mut positional = filtered_positional();
        let mut incremental = IncrementalPid::with_defaults();
        for sp in signals::hostile() {
            positional.set_setpoint(sp);
            incremental.set_setpoint(sp);
            let _ = positional.update(0.0);
            let _ = incremental.update(0.0);
        }
    }

    #[test]
    fn fuzz_hostile_feedback_incremental() {
        let mut pid = IncrementalPid::new(PidConfig::default().with_gains(1.0, 0.5, 0.1));
        pid.set_setpoint(1.0);
        for y in signals::hostile() {
            let _ = pid.update(y);
        }
    }

    #[test]
    fn fuzz_hostile_tunings_do_not_panic() {
        init_test_tracing();
        let hostile = signals::hostile();
        for &a in &hostile {
            for &b in &hostile {
                let mut positional = PositionalPid::with_defaults();
                positional.set_gains(a, b, a);
                positional.set_output_limits(b, a);
                positional.set_integral_limits(a, b);
                positional.set_setpoint(1.0);

                let mut incremental = IncrementalPid::with_defaults();
                incremental.set_gains(a, b, a);
                incremental.set_output_limits(b, a);
                incremental.set_delta_limit(b);
                incremental.set_setpoint(1.0);

                for _ in 0..4 {
                    let _ = positional.update(0.5);
                    let _ = incremental.update(0.5);
                }
            }
        }
    }

    #[test]
    fn fuzz_inverted_limits_stay_bounded() {
        let mut pid = PositionalPid::with_defaults();
        pid.set_output_limits(5.0, -5.0);
        pid.set_setpoint(100.0);
        assert_eq!(pid.update(0.0), -5.0);
        pid.set_setpoint(-100.0);
        assert_eq!(pid.update(0.0), 5.0);
    }

    #[test]
    fn fuzz_reset_recovers_from_nan() {
        let mut positional = filtered_positional();
        let mut incremental = IncrementalPid::with_defaults();
        positional.set_setpoint(1.0);
        incremental.set_setpoint(1.0);
        for _ in 0..3 {
            positional.update(f32::NAN);
            incremental.update(f32::NAN);
        }
        assert!(incremental.output().is_nan());

        positional.reset();
        incremental.reset();
        positional.set_setpoint(1.0);
        incremental.set_setpoint(1.0);
        for _ in 0..10 {
            assert!(positional.update(0.5).is_finite());
            assert!(incremental.update(0.5).is_finite());
        }
    }

    #[test]
    fn fuzz_zero_ki_never_divides() {
        let cfg = PidConfig::default()
            .with_gains(1000.0, 0.0, 0.0)
            .with_output_limits(-1.0, 1.0);
        let mut pid = PositionalPid::new(cfg);
        pid.set_setpoint(1.0e6);
        for _ in 0..10 {
            assert_eq!(pid.update(0.0), 1.0);
        }
        assert_eq!(pid.integral_state(), 0.0);
    }
}
