//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use ctrlkit_errors::prelude::*;
//! use ctrlkit_errors::{validate_finite, validate_range};
//!
//! fn check_dt(dt: f32) -> ValidationResult {
//!     validate_finite!("dt", dt);
//!     validate_range!("dt", dt, f32::MIN_POSITIVE, 1.0);
//!     Ok(())
//! }
//!
//! assert!(check_dt(0.01).is_ok());
//! assert!(check_dt(0.0).is_err());
//! assert!(check_dt(f32::NAN).is_err());
//! ```

pub use crate::{
    Result, ValidationResult,
    common::{ControlError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt},
    validation::ValidationError,
};

/// Return early with `$error` unless `$condition` holds.
#[macro_export]
macro_rules! validate {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err($error.into());
        }
    };
}

/// Return early with a [`ValidationError::NonFinite`](crate::ValidationError) when
/// `$value` is NaN or infinite.
#[macro_export]
macro_rules! validate_finite {
    ($field:expr, $value:expr) => {
        if !$value.is_finite() {
            return Err($crate::ValidationError::non_finite($field, $value).into());
        }
    };
}

/// Return early with an out of range validation error when `$value` lies
/// outside `[$min, $max]`.
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $value:expr, $min:expr, $max:expr) => {
        if $value < $min || $value > $max {
            return Err($crate::ValidationError::out_of_range($field, $value, $min, $max).into());
        }
    };
}

/// Return early with an inverted range error when `$min > $max`.
#[macro_export]
macro_rules! validate_ordered {
    ($field:expr, $min:expr, $max:expr) => {
        if $min > $max {
            return Err($crate::ValidationError::inverted_range($field, $min, $max).into());
        }
    };
}
