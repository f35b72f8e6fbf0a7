//! RT-safe scalar filters for ctrlkit control loops
//!
//! This crate provides the signal-conditioning primitives a PID loop hangs
//! off its setpoint, feedback, derivative and output paths. Every filter is a
//! small value type that is updated once per control tick.
//!
//! # Overview
//!
//! - **Low-pass**: First-order exponential smoothing
//! - **Moving average**: Fixed-window mean with a running sum
//! - **Median**: Fixed-window median for spike rejection
//! - **Kalman**: Scalar Kalman filter for a constant-value process
//! - **Butterworth**: Second-order low-pass biquad
//! - **Slew rate**: Per-tick rate-of-change limiter
//! - **Limit average**: Slew limiter followed by a moving average
//!
//! All of them implement [`Filter`], so a controller can hold any of them (or
//! a closure, via [`FnFilter`]) in a [`FilterSlot`]. [`FilterSpec`] describes
//! a filter declaratively for profiles and the CLI.
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations in `update` or `reset` (window buffers are inline
//!   const-generic arrays)
//! - O(1) time complexity, except the median's sort bounded by its window
//! - No syscalls, I/O or locking
//! - The first sample after construction or reset seeds filters with memory,
//!   so outputs start at the signal instead of ramping up from zero
//!
//! # Example
//!
//! ```
//! use ctrlkit_filters::prelude::*;
//!
//! // Build filters at initialization time
//! let mut median = Median::<5>::new();
//! let mut smooth = LowPass::new(0.3);
//!
//! // In the control loop:
//! for raw in [1.0, 1.1, 50.0, 1.2, 1.0] {
//!     let clean = smooth.update(median.update(raw));
//!     assert!(clean < 10.0);
//! }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod butterworth;
pub mod config;
pub mod filter;
pub mod kalman;
pub mod limit_average;
pub mod low_pass;
pub mod median;
pub mod moving_average;
pub mod prelude;
pub mod slew_rate;

pub use butterworth::Butterworth;
pub use config::FilterSpec;
pub use filter::{Filter, FilterSlot, FnFilter};
pub use kalman::Kalman;
pub use limit_average::LimitAverage;
pub use low_pass::LowPass;
pub use median::Median;
pub use moving_average::MovingAverage;
pub use slew_rate::SlewRateLimiter;

/// Clamp `value` to `[min, max]` without panicking.
///
/// Unlike [`f32::clamp`] this never panics on `min > max` or NaN bounds: the
/// lower bound is checked first, so an inverted range yields `min`. A NaN
/// `value` is passed through.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
#[inline]
pub fn saturate(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_saturate() {
        assert_relative_eq!(saturate(0.5, -1.0, 1.0), 0.5);
        assert_relative_eq!(saturate(2.0, -1.0, 1.0), 1.0);
        assert_relative_eq!(saturate(-2.0, -1.0, 1.0), -1.0);
    }

    #[test]
    fn test_saturate_inverted_range_does_not_panic() {
        assert_relative_eq!(saturate(0.0, 1.0, -1.0), 1.0);
        assert!(saturate(f32::NAN, -1.0, 1.0).is_nan());
    }

    #[test]
    fn test_saturate_infinite_value() {
        assert_relative_eq!(saturate(f32::INFINITY, -3.0, 3.0), 3.0);
        assert_relative_eq!(saturate(f32::NEG_INFINITY, -3.0, 3.0), -3.0);
    }
}
