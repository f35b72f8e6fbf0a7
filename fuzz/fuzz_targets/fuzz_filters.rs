//! Fuzzes every filter primitive with arbitrary f32 sample streams.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_filters
#![no_main]
use ctrlkit_filters::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut filters: [Box<dyn Filter>; 7] = [
        Box::new(LowPass::default()),
        Box::new(MovingAverage::<10>::new()),
        Box::new(Median::<5>::new()),
        Box::new(Kalman::default()),
        Box::new(Butterworth::default()),
        Box::new(SlewRateLimiter::default()),
        Box::new(LimitAverage::<10>::default()),
    ];

    // Must never panic, whatever the samples (NaN and infinities included).
    for chunk in data.chunks_exact(4) {
        let x = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        for filter in &mut filters {
            let _ = filter.update(x);
        }
    }

    // A reset filter fed finite input must produce finite output.
    for filter in &mut filters {
        filter.reset();
        for _ in 0..12 {
            assert!(filter.update(1.0).is_finite());
        }
    }
});
