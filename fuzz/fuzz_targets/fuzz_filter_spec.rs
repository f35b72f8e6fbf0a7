//! Fuzzes FilterSpec decoding and construction from arbitrary JSON.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_filter_spec
#![no_main]
use ctrlkit_filters::FilterSpec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(spec) = serde_json::from_slice::<FilterSpec>(data) else {
        return;
    };

    // Whatever decodes must either be rejected or build a usable filter.
    if let Ok(mut filter) = spec.build() {
        assert!(spec.validate().is_ok());
        for x in [0.0, 1.0, -1.0, 1.0e6] {
            let _ = filter.update(x);
        }
    }
});
