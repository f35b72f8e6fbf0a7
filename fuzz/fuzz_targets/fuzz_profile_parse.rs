//! Fuzzes controller profile parsing (JSON and YAML) and controller builds.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_profile_parse
#![no_main]
use ctrlkit_pid::ControllerProfile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for profile in [
        ControllerProfile::from_json_str(text),
        ControllerProfile::from_yaml_str(text),
    ]
    .into_iter()
    .flatten()
    {
        // Build errors are fine; panics are not.
        if let Ok(mut pid) = profile.build_positional() {
            pid.set_setpoint(1.0);
            let _ = pid.update(0.0);
        }
        if let Ok(mut pid) = profile.build_incremental() {
            pid.set_setpoint(1.0);
            let _ = pid.update(0.0);
        }
    }
});
