//! Fuzzes the positional PID with arbitrary tunings and measurements.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_positional_pid
#![no_main]
use ctrlkit_filters::{LowPass, Median};
use ctrlkit_pid::{PidConfig, PositionalPid};
use libfuzzer_sys::fuzz_target;

fn read_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 25 {
        return;
    }
    let (header, stream) = data.split_at(25);
    let flags = header[24];

    let cfg = PidConfig::default()
        .with_gains(read_f32(&header[0..4]), read_f32(&header[4..8]), read_f32(&header[8..12]))
        .with_deadband(read_f32(&header[12..16]).abs())
        .with_anti_windup(flags & 1 != 0)
        .with_derivative_on_measurement(flags & 2 != 0);
    let mut pid = PositionalPid::new(cfg);
    if flags & 4 != 0 {
        pid.set_feedback_filter(Median::<5>::new());
        pid.set_derivative_filter(LowPass::new(0.3));
    }
    pid.set_setpoint(read_f32(&header[16..20]));
    let limit = read_f32(&header[20..24]).abs();
    pid.set_output_limits(-limit, limit);

    // Must never panic; with finite limits a finite output stays inside them.
    for chunk in stream.chunks_exact(4) {
        let u = pid.update(read_f32(chunk));
        if limit.is_finite() && u.is_finite() {
            assert!(u.abs() <= limit);
        }
    }
});
