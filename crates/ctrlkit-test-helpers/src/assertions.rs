//! Assertion macros for control-loop tests.
//!
//! All macros panic with the offending values and the caller's location.

/// Assert that two floating-point values are within `tolerance` of each
/// other.
///
/// NaN on either side always fails.
///
/// # Example
///
/// ```rust
/// use ctrlkit_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.1_f32 + 0.2, 0.3, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that `value` lies in the closed interval `[min, max]`.
///
/// # Example
///
/// ```rust
/// use ctrlkit_test_helpers::assert_within;
///
/// assert_within!(0.5_f32, -1.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_within {
    ($value:expr, $min:expr, $max:expr $(,)?) => {
        let value = $value;
        let min = $min;
        let max = $max;
        if !(value >= min && value <= max) {
            panic!(
                "assertion failed: `{:?}` is outside [{:?}, {:?}]",
                value, min, max
            );
        }
    };
    ($value:expr, $min:expr, $max:expr, $($arg:tt)+) => {
        let value = $value;
        let min = $min;
        let max = $max;
        if !(value >= min && value <= max) {
            panic!(
                "assertion failed: `{:?}` is outside [{:?}, {:?}]: {}",
                value, min, max, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that every sample in a collection of floats is finite.
///
/// # Example
///
/// ```rust
/// use ctrlkit_test_helpers::assert_all_finite;
///
/// assert_all_finite!(&[0.0_f32, -3.5, 1e30]);
/// ```
#[macro_export]
macro_rules! assert_all_finite {
    ($samples:expr $(,)?) => {
        for (i, sample) in $samples.iter().enumerate() {
            if !sample.is_finite() {
                panic!("assertion failed: sample {} is not finite: {:?}", i, sample);
            }
        }
    };
}

/// Assert that a sequence never decreases.
///
/// # Example
///
/// ```rust
/// use ctrlkit_test_helpers::assert_non_decreasing;
///
/// assert_non_decreasing!(&[0.0_f32, 0.5, 0.5, 1.0]);
/// ```
#[macro_export]
macro_rules! assert_non_decreasing {
    ($samples:expr $(,)?) => {
        let mut iter = $samples.iter();
        if let Some(mut prev) = iter.next() {
            for (i, curr) in iter.enumerate() {
                if prev > curr {
                    panic!(
                        "assertion failed: sequence decreases at index {}: {:?} > {:?}",
                        i + 1,
                        prev,
                        curr
                    );
                }
                prev = curr;
            }
        }
    };
}
