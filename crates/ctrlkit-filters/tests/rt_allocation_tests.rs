//! Allocation checks for the filter hot path.
//!
//! Binding a filter into a slot boxes it once; afterwards `update`, `apply`
//! and `reset` must not allocate.

use ctrlkit_filters::prelude::*;
use ctrlkit_test_helpers::assert_rt_safe;
use ctrlkit_test_helpers::signals;
use ctrlkit_test_helpers::tracking::{TrackingAllocator, track};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

#[test]
fn concrete_filters_do_not_allocate() {
    let input = signals::noisy(256, 1.0, 0.5, 42);

    let mut lp = LowPass::default();
    let mut avg = MovingAverage::<10>::new();
    let mut med = Median::<5>::new();
    let mut kf = Kalman::default();
    let mut bw = Butterworth::default();
    let mut sl = SlewRateLimiter::default();
    let mut la = LimitAverage::<10>::default();

    let guard = track();
    let mut acc = 0.0_f32;
    for &x in &input {
        acc += lp.update(x);
        acc += avg.update(x);
        acc += med.update(x);
        acc += kf.update(x);
        acc += bw.update(x);
        acc += sl.update(x);
        acc += la.update(x);
    }
    lp.reset();
    avg.reset();
    med.reset();
    kf.reset();
    bw.reset();
    sl.reset();
    la.reset();
    assert_rt_safe!(guard, "concrete filter updates");
    assert!(acc.is_finite());
}

#[test]
fn bound_slots_do_not_allocate() {
    let input = signals::sine(256, 2.0, 3.0, 100.0);
    let mut slots = [
        FilterSlot::new(Median::<5>::new()),
        FilterSlot::new(Butterworth::new(5.0, 100.0)),
        FilterSlot::new(FnFilter::new(|x: f32| x * 2.0)),
        FilterSlot::empty(),
    ];

    let guard = track();
    for &x in &input {
        for slot in &mut slots {
            std::hint::black_box(slot.apply(x));
        }
    }
    for slot in &mut slots {
        slot.reset();
    }
    assert_rt_safe!(guard, "FilterSlot::apply");
}

#[test]
fn binding_is_where_allocation_happens() {
    let mut slot = FilterSlot::empty();
    let guard = track();
    slot.set(LowPass::default());
    assert!(guard.has_allocations());
    drop(guard);

    let guard = track();
    std::hint::black_box(slot.apply(1.0));
    assert_rt_safe!(guard, "apply after bind");
}
