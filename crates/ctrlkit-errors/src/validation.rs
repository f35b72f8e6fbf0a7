//! Parameter validation error types.
//!
//! Raised when a filter specification, PID configuration or controller
//! profile carries a value the control loop cannot run with.

use core::fmt;

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Minimum allowed value
        min: String,
        /// Maximum allowed value
        max: String,
    },

    /// Value is NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
    },

    /// A `[min, max]` pair with `min > max`
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Field name
        field: String,
        /// Lower bound as given
        min: String,
        /// Upper bound as given
        max: String,
    },

    /// Value is required but missing
    #[error("Required field '{0}' is missing")]
    Required(String),

    /// Constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    /// Name of the offending field, when the variant carries one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::NonFinite { field, .. }
            | ValidationError::InvertedRange { field, .. } => Some(field),
            ValidationError::Required(field) => Some(field),
            ValidationError::ConstraintViolation(_) => None,
        }
    }

    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create a non-finite value error.
    pub fn non_finite<T: fmt::Debug>(field: impl Into<String>, value: T) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
            value: format!("{value:?}"),
        }
    }

    /// Create an inverted range error.
    pub fn inverted_range<T: fmt::Debug>(field: impl Into<String>, min: T, max: T) -> Self {
        ValidationError::InvertedRange {
            field: field.into(),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create a required field error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required(field.into())
    }

    /// Create a constraint violation error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        ValidationError::ConstraintViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_out_of_range() {
        let err = ValidationError::out_of_range("alpha", 1.5_f32, 0.0_f32, 1.0_f32);
        let msg = err.to_string();
        assert!(msg.contains("alpha"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_validation_error_non_finite() {
        let err = ValidationError::non_finite("dt", f32::NAN);
        assert_eq!(err.to_string(), "dt must be finite, got NaN");
        assert_eq!(err.field(), Some("dt"));
    }

    #[test]
    fn test_validation_error_inverted_range() {
        let err = ValidationError::inverted_range("output", 10.0_f32, -10.0_f32);
        let msg = err.to_string();
        assert!(msg.contains("output"));
        assert!(msg.contains("10.0"));
        assert!(msg.contains("-10.0"));
    }

    #[test]
    fn test_validation_error_required() {
        let err = ValidationError::required("pid");
        assert_eq!(err.to_string(), "Required field 'pid' is missing");
    }

    #[test]
    fn test_constraint_has_no_field() {
        let err = ValidationError::constraint("cutoff must be below Nyquist");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_validation_error_severity() {
        assert_eq!(
            ValidationError::required("test").severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_validation_error_equality() {
        let err1 = ValidationError::required("field");
        let err2 = ValidationError::required("field");
        assert_eq!(err1, err2);
    }
}
