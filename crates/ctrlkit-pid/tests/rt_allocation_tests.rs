//! Allocation checks for the controller hot path.
//!
//! Building a controller and binding its filters may allocate; after that
//! `update`, `set_setpoint` and `reset` must not.

use ctrlkit_filters::{FilterSpec, LowPass, Median};
use ctrlkit_pid::prelude::*;
use ctrlkit_test_helpers::assert_rt_safe;
use ctrlkit_test_helpers::must::must;
use ctrlkit_test_helpers::signals;
use ctrlkit_test_helpers::tracking::{TrackingAllocator, measure, track};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

#[test]
fn positional_update_does_not_allocate() {
    let input = signals::noisy(512, 1.0, 0.2, 7);
    let cfg = PidConfig::default()
        .with_gains(2.0, 0.5, 0.05)
        .with_output_limits(-5.0, 5.0);
    let mut pid = PositionalPid::new(cfg);
    pid.set_setpoint_filter(LowPass::new(0.5));
    pid.set_feedback_filter(Median::<5>::new());
    pid.set_derivative_filter(LowPass::new(0.2));
    pid.set_output_filter(LowPass::new(0.8));

    let guard = track();
    let mut acc = 0.0_f32;
    for (i, &y) in input.iter().enumerate() {
        if i % 64 == 0 {
            pid.set_setpoint(2.0);
        }
        acc += pid.update(y);
    }
    pid.reset();
    assert_rt_safe!(guard, "positional update");
    assert!(acc.is_finite());
}

#[test]
fn incremental_update_does_not_allocate() {
    let input = signals::sine(512, 1.0, 2.0, 100.0);
    let mut pid = IncrementalPid::new(PidConfig::default().with_gains(1.0, 2.0, 0.01));
    pid.set_feedback_filter(Median::<5>::new());
    pid.set_output_filter(LowPass::new(0.5));
    pid.set_setpoint(0.5);

    let guard = track();
    for &y in &input {
        pid.update(y);
    }
    pid.reset();
    assert_rt_safe!(guard, "incremental update");
}

#[test]
fn profile_built_controller_does_not_allocate() {
    let profile = ControllerProfile::new(PidConfig::default().with_gains(1.0, 0.1, 0.01))
        .with_filter(TapPoint::Feedback, FilterSpec::LimitAverage { max_delta: 0.5 })
        .with_filter(TapPoint::Derivative, FilterSpec::Butterworth {
            cutoff_hz: 10.0,
            sample_hz: 100.0,
        });
    let mut pid = must(profile.build_positional());
    pid.set_setpoint(1.0);
    let input = signals::step(256, 10, 0.0, 1.0);

    let (last, report) = measure("profile controller", || {
        input.iter().fold(0.0, |_, &y| pid.update(y))
    });
    report.assert_zero();
    assert!(last.is_finite());
}

#[test]
fn binding_a_filter_allocates() {
    let mut pid = PositionalPid::with_defaults();
    let guard = track();
    pid.set_feedback_filter(LowPass::default());
    assert!(guard.has_allocations());
}
