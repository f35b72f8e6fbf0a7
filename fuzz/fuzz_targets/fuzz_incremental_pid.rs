//! Fuzzes the incremental PID with arbitrary tunings and measurements.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_incremental_pid
#![no_main]
use ctrlkit_pid::{IncrementalPid, PidConfig};
use libfuzzer_sys::fuzz_target;

fn read_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 20 {
        return;
    }
    let (header, stream) = data.split_at(20);

    let cfg = PidConfig::default().with_gains(
        read_f32(&header[0..4]),
        read_f32(&header[4..8]),
        read_f32(&header[8..12]),
    );
    let mut pid = IncrementalPid::new(cfg);
    let delta_limit = read_f32(&header[12..16]).abs();
    pid.set_delta_limit(delta_limit);
    pid.set_setpoint(read_f32(&header[16..20]));

    // Must never panic; a finite step never exceeds the increment limit.
    let mut previous = pid.output();
    for chunk in stream.chunks_exact(4) {
        let u = pid.update(read_f32(chunk));
        if u.is_finite() && previous.is_finite() && delta_limit.is_finite() {
            let rounding = u.abs().max(previous.abs()) * f32::EPSILON;
            assert!((u - previous).abs() <= delta_limit + rounding);
        }
        previous = u;
    }
});
